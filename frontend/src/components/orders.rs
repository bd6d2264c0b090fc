//! 订单列表页
//!
//! 订单行只带商品 id，名称与单价来自同时加载的商品目录。

use crate::api::use_session_api;
use crate::auth::use_auth;
use crate::components::icons::{Pencil, Plus, Trash};
use crate::components::toasts::Toasts;
use crate::components::widgets::{
    DialogActions, FieldError, FormDialog, Pager, SearchBar, TablePlaceholder,
};
use crate::screen::{ScreenHandle, use_screen};
use crate::web::FetchClient;
use backoffice::collection::PAGE_SIZE;
use backoffice::forms::{FormErrors, OrderForm, OrderLineForm, line_field};
use backoffice::resources::{OrdersGateway, ProductCatalog};
use backoffice::screen::{Modal, ModalMode};
use backoffice_shared::Order;
use backoffice_shared::date::{format_money, format_optional_datetime};
use leptos::prelude::*;
use leptos::task::spawn_local;

type OrdersScreen = ScreenHandle<OrdersGateway<FetchClient>>;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = use_session_api();
    let user_id = use_auth()
        .session
        .with_untracked(|s| s.user_id().map(String::from));
    let screen = use_screen(OrdersGateway::new(api.clone(), user_id.clone()));
    let catalog = RwSignal::new(ProductCatalog::default());

    // 订单与商品目录并行加载
    spawn_local(async move {
        let (loaded, _) = futures::join!(ProductCatalog::load(&api), screen.reload());
        catalog.set(loaded);
    });

    let page = RwSignal::new(0usize);
    let loading = Signal::derive(move || screen.read(|s| s.collection.is_loading()));
    let empty = Signal::derive(move || screen.read(|s| s.collection.filtered().is_empty()));
    let rows = move || {
        let page = page.get();
        screen.read(|s| s.collection.page(page, PAGE_SIZE).to_vec())
    };

    view! {
        <div class="space-y-4">
            <Toasts
                notifications=Signal::derive(move || screen.read(|s| s.notifications.clone()))
                on_dismiss=move |id| screen.dismiss(id)
            />

            <div class="flex flex-col md:flex-row gap-4 md:items-center md:justify-between">
                <SearchBar
                    placeholder="Buscar por ID de orden o estado"
                    on_search=move |q: String| {
                        screen.search(&q);
                        page.set(0);
                    }
                />
                <button class="btn btn-primary gap-2" on:click=move |_| screen.open_add()>
                    <Plus attr:class="h-4 w-4" /> "Agregar Orden"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"ID de Orden"</th>
                                <th>"Usuario"</th>
                                <th>"Total"</th>
                                <th>"Subtotal"</th>
                                <th>"Estado"</th>
                                <th class="hidden md:table-cell">"Fecha de creación"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TablePlaceholder colspan=7 loading=loading empty=empty />
                            <For
                                each=rows
                                key=|o: &Order| o.id.clone()
                                children=move |order| view! { <OrderRow order=order catalog=catalog screen=screen /> }
                            />
                        </tbody>
                    </table>
                </div>
                <div class="flex justify-end p-4">
                    <Pager
                        page=page
                        page_count=Signal::derive(move || screen.read(|s| s.collection.page_count(PAGE_SIZE)))
                    />
                </div>
            </div>

            <OrderModal screen=screen catalog=catalog user_id=user_id />
        </div>
    }
}

#[component]
fn OrderRow(order: Order, catalog: RwSignal<ProductCatalog>, screen: OrdersScreen) -> impl IntoView {
    let status_class = if order.is_pending() {
        "badge badge-warning"
    } else {
        "badge badge-success"
    };
    let id = order.id.clone();
    let delete_id = order.id.clone();
    let owner = order.fk_user.clone();
    let status = order.status.clone();
    let total = format_money(order.total);
    let subtotal = format_money(order.subtotal);
    let created = format_optional_datetime(order.creation_date.as_deref());
    let lines = order.products.clone();

    let details = (!lines.is_empty()).then(|| {
        let summary = move || {
            catalog.with(|catalog| {
                lines
                    .iter()
                    .map(|line| {
                        let text = format!(
                            "Producto: {} · Cantidad: {} · Precio: {}",
                            catalog.label(&line.product_id),
                            line.quantity,
                            format_money(line.price)
                        );
                        view! { <li>{text}</li> }
                    })
                    .collect_view()
            })
        };
        view! {
            <tr class="bg-base-200/50">
                <td colspan="7">
                    <ul class="ml-4 text-sm opacity-80 space-y-1">{summary}</ul>
                </td>
            </tr>
        }
    });

    view! {
        <tr class="hover">
            <td class="font-mono text-xs">{id}</td>
            <td class="font-mono text-xs opacity-70">{owner}</td>
            <td class="font-mono">{total}</td>
            <td class="font-mono">{subtotal}</td>
            <td><span class=status_class>{status}</span></td>
            <td class="hidden md:table-cell text-sm opacity-70">{created}</td>
            <td class="flex gap-1">
                <button
                    class="btn btn-ghost btn-sm gap-1 text-info"
                    on:click=move |_| screen.open_edit(order.clone())
                >
                    <Pencil attr:class="h-4 w-4" /> "Editar"
                </button>
                <button
                    class="btn btn-ghost btn-sm gap-1 text-error"
                    on:click=move |_| screen.delete(delete_id.clone())
                >
                    <Trash attr:class="h-4 w-4" /> "Eliminar"
                </button>
            </td>
        </tr>
        {details}
    }
}

#[component]
fn OrderModal(
    screen: OrdersScreen,
    catalog: RwSignal<ProductCatalog>,
    user_id: Option<String>,
) -> impl IntoView {
    let form = RwSignal::new(OrderForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let modal = Memo::new(move |_| screen.read(|s| s.modal.clone()));
    let mode = move || modal.with(Modal::mode);

    Effect::new(move |_| {
        match modal.get() {
            Modal::Add => form.set(OrderForm::default()),
            Modal::Edit(order) => form.set(OrderForm::from_order(&order)),
            Modal::Closed => {}
        }
        errors.set(FormErrors::new());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(OrderForm::validate) {
            Ok(draft) => {
                errors.set(FormErrors::new());
                screen.submit(draft);
            }
            Err(e) => errors.set(e),
        }
    };

    let is_edit = move || mode() == Some(ModalMode::Edit);
    let owner = move || {
        modal.with(|m| match m {
            Modal::Edit(order) => order.fk_user.clone(),
            _ => user_id.clone().unwrap_or_default(),
        })
    };
    let line_count = move || form.with(|f| f.lines.len());

    view! {
        <FormDialog
            open=Signal::derive(move || modal.with(Modal::is_open))
            title=Signal::derive(move || if is_edit() { "Editar orden" } else { "Crear orden" })
            on_close=move |_| screen.close_modal()
        >
            <form on:submit=on_submit class="space-y-3">
                <div class="form-control">
                    <label class="label"><span class="label-text">"ID Usuario"</span></label>
                    <input type="text" class="input input-bordered w-full font-mono" disabled prop:value=owner />
                </div>

                <For
                    each=move || 0..line_count()
                    key=|index| *index
                    children=move |index| view! {
                        <OrderLineEditor index=index form=form errors=errors catalog=catalog />
                    }
                />

                <button
                    type="button"
                    class="btn btn-outline btn-block border-dashed gap-2"
                    on:click=move |_| form.update(OrderForm::add_line)
                >
                    <Plus attr:class="h-4 w-4" /> "Añadir producto"
                </button>

                <DialogActions
                    submit_label="Guardar cambios"
                    submitting=Signal::derive(move || screen.read(|s| s.submitting))
                    on_cancel=move |_| screen.close_modal()
                />
            </form>
        </FormDialog>
    }
}

#[component]
fn OrderLineEditor(
    index: usize,
    form: RwSignal<OrderForm>,
    errors: RwSignal<FormErrors>,
    catalog: RwSignal<ProductCatalog>,
) -> impl IntoView {
    let field = move |pick: fn(&OrderLineForm) -> String| {
        move || form.with(|f| f.lines.get(index).map(pick).unwrap_or_default())
    };
    let error_for = move |name: &'static str| {
        let key = line_field(index, name);
        Signal::derive(move || errors.with(|e| e.get(&key)))
    };

    view! {
        <div class="border border-base-300 rounded-box p-3 space-y-2">
            <div class="form-control">
                <label class="label"><span class="label-text">"Producto"</span></label>
                <select class="select select-bordered w-full"
                    prop:value=field(|l| l.product_id.clone())
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        catalog.with_untracked(|catalog| {
                            form.update(|f| f.select_product(index, &id, catalog))
                        });
                    }
                >
                    <option value="" disabled>"Selecciona un producto"</option>
                    {move || catalog.with(|catalog| {
                        catalog
                            .options()
                            .map(|(id, name)| {
                                let id = id.to_string();
                                let name = name.to_string();
                                view! { <option value=id>{name}</option> }
                            })
                            .collect_view()
                    })}
                </select>
                <FieldError message=error_for("productId") />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">"Cantidad"</span></label>
                    <input type="number" min="1" step="1" class="input input-bordered w-full"
                        prop:value=field(|l| l.quantity.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                if let Some(line) = f.lines.get_mut(index) {
                                    line.quantity = value;
                                }
                            });
                        }
                    />
                    <FieldError message=error_for("quantity") />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Precio"</span></label>
                    <input type="number" class="input input-bordered w-full" disabled prop:value=field(|l| l.price.clone()) />
                    <FieldError message=error_for("price") />
                </div>
            </div>
            <button
                type="button"
                class="btn btn-error btn-outline btn-sm gap-1"
                on:click=move |_| form.update(|f| f.remove_line(index))
            >
                <Trash attr:class="h-4 w-4" /> "Quitar producto"
            </button>
        </div>
    }
}
