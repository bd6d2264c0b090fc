//! 商品列表页

use crate::api::use_session_api;
use crate::components::icons::{Pencil, Plus, Trash};
use crate::components::toasts::Toasts;
use crate::components::widgets::{
    DialogActions, FieldError, FormDialog, Pager, SearchBar, TablePlaceholder,
};
use crate::screen::{ScreenHandle, use_screen};
use crate::web::FetchClient;
use backoffice::collection::PAGE_SIZE;
use backoffice::forms::{FormErrors, ProductForm};
use backoffice::resources::ProductsGateway;
use backoffice::screen::Modal;
use backoffice_shared::date::{format_money, format_optional_datetime};
use backoffice_shared::{Product, ProductStatus};
use leptos::prelude::*;

type ProductsScreen = ScreenHandle<ProductsGateway<FetchClient>>;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let screen = use_screen(ProductsGateway::new(use_session_api()));
    screen.refresh();

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
                    placeholder="Buscar por nombre o descripción"
                    on_search=move |q: String| {
                        screen.search(&q);
                        page.set(0);
                    }
                />
                <button class="btn btn-primary gap-2" on:click=move |_| screen.open_add()>
                    <Plus attr:class="h-4 w-4" /> "Agregar producto"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Nombre"</th>
                                <th>"Descripción"</th>
                                <th>"Cantidad"</th>
                                <th>"Precio"</th>
                                <th>"Estado"</th>
                                <th class="hidden md:table-cell">"Fecha de Creación"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TablePlaceholder colspan=7 loading=loading empty=empty />
                            <For
                                each=rows
                                key=|p: &Product| p.id.clone()
                                children=move |product| view! { <ProductRow product=product screen=screen /> }
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

            <ProductModal screen=screen />
        </div>
    }
}

#[component]
fn ProductRow(product: Product, screen: ProductsScreen) -> impl IntoView {
    let status_class = match product.status {
        ProductStatus::Active => "badge badge-success",
        ProductStatus::Inactive => "badge badge-error",
    };
    let status = product.status.as_str().to_uppercase();
    let created = format_optional_datetime(product.created_at.as_deref());
    let price = format_money(product.price);
    let id = product.id.clone();
    let name = product.name.clone();
    let description = product.description.clone();
    let quantity = product.quantity;

    view! {
        <tr>
            <td class="font-bold">{name}</td>
            <td class="max-w-xs truncate">{description}</td>
            <td>{quantity}</td>
            <td class="font-mono">{price}</td>
            <td><span class=status_class>{status}</span></td>
            <td class="hidden md:table-cell text-sm opacity-70">{created}</td>
            <td class="flex gap-1">
                <button
                    class="btn btn-ghost btn-sm gap-1 text-info"
                    on:click=move |_| screen.open_edit(product.clone())
                >
                    <Pencil attr:class="h-4 w-4" /> "Editar"
                </button>
                <button
                    class="btn btn-ghost btn-sm gap-1 text-error"
                    on:click=move |_| screen.delete(id.clone())
                >
                    <Trash attr:class="h-4 w-4" /> "Eliminar"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn ProductModal(screen: ProductsScreen) -> impl IntoView {
    let form = RwSignal::new(ProductForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let modal = Memo::new(move |_| screen.read(|s| s.modal.clone()));

    Effect::new(move |_| {
        match modal.get() {
            Modal::Add => form.set(ProductForm::default()),
            Modal::Edit(product) => form.set(ProductForm::from_product(&product)),
            Modal::Closed => {}
        }
        errors.set(FormErrors::new());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ProductForm::validate) {
            Ok(fields) => {
                errors.set(FormErrors::new());
                screen.submit(fields);
            }
            Err(e) => errors.set(e),
        }
    };

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let editing = move || modal.with(|m| matches!(m, Modal::Edit(_)));

    view! {
        <FormDialog
            open=Signal::derive(move || modal.with(Modal::is_open))
            title=Signal::derive(move || if editing() { "Editar producto" } else { "Crear producto" })
            on_close=move |_| screen.close_modal()
        >
            <form on:submit=on_submit class="space-y-2">
                <div class="form-control">
                    <label class="label" for="product_name"><span class="label-text">"Nombre"</span></label>
                    <input id="product_name" type="text" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError message=error_for("name") />
                </div>
                <div class="form-control">
                    <label class="label" for="product_description"><span class="label-text">"Descripción"</span></label>
                    <textarea id="product_description" class="textarea textarea-bordered w-full"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="product_quantity"><span class="label-text">"Cantidad"</span></label>
                        <input id="product_quantity" type="number" min="0" step="1" class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.quantity.clone())
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                        <FieldError message=error_for("quantity") />
                    </div>
                    <div class="form-control">
                        <label class="label" for="product_price"><span class="label-text">"Precio"</span></label>
                        <input id="product_price" type="number" min="0" step="0.01" class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />
                        <FieldError message=error_for("price") />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="product_status"><span class="label-text">"Estado"</span></label>
                    <select id="product_status" class="select select-bordered w-full"
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        {[ProductStatus::Active, ProductStatus::Inactive]
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldError message=error_for("status") />
                </div>

                <DialogActions
                    submit_label="Guardar"
                    submitting=Signal::derive(move || screen.read(|s| s.submitting))
                    on_cancel=move |_| screen.close_modal()
                />
            </form>
        </FormDialog>
    }
}
