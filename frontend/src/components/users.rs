//! 用户列表页

use crate::api::use_session_api;
use crate::components::icons::{Pencil, Plus};
use crate::components::toasts::Toasts;
use crate::components::widgets::{
    DialogActions, FieldError, FormDialog, Pager, SearchBar, TablePlaceholder,
};
use crate::screen::{ScreenHandle, use_screen};
use crate::web::FetchClient;
use backoffice::collection::PAGE_SIZE;
use backoffice::forms::{FormErrors, ROLE_OPTIONS, UserForm};
use backoffice::resources::UsersGateway;
use backoffice::screen::{Modal, ModalMode};
use backoffice_shared::User;
use leptos::prelude::*;

type UsersScreen = ScreenHandle<UsersGateway<FetchClient>>;

#[component]
pub fn UsersPage() -> impl IntoView {
    let screen = use_screen(UsersGateway::new(use_session_api()));
    screen.refresh();

    let page = RwSignal::new(0usize);
    let loading = Signal::derive(move || screen.read(|s| s.collection.is_loading()));
    let rows = move || {
        let page = page.get();
        screen.read(|s| s.collection.page(page, PAGE_SIZE).to_vec())
    };
    let empty = Signal::derive(move || screen.read(|s| s.collection.filtered().is_empty()));

    view! {
        <div class="space-y-4">
            <Toasts
                notifications=Signal::derive(move || screen.read(|s| s.notifications.clone()))
                on_dismiss=move |id| screen.dismiss(id)
            />

            <div class="flex flex-col md:flex-row gap-4 md:items-center md:justify-between">
                <SearchBar
                    placeholder="Buscar por nombre o correo"
                    on_search=move |q: String| {
                        screen.search(&q);
                        page.set(0);
                    }
                />
                <button class="btn btn-primary gap-2" on:click=move |_| screen.open_add()>
                    <Plus attr:class="h-4 w-4" /> "Agregar usuario"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Nombre"</th>
                                <th>"Correo"</th>
                                <th>"Teléfono"</th>
                                <th>"Rol"</th>
                                <th>"Estado"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TablePlaceholder colspan=6 loading=loading empty=empty />
                            <For
                                each=rows
                                key=|u: &User| u.id.clone()
                                children=move |user| view! { <UserRow user=user screen=screen /> }
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

            <UserModal screen=screen />
        </div>
    }
}

#[component]
fn UserRow(user: User, screen: UsersScreen) -> impl IntoView {
    let role = user.role_label().unwrap_or_else(|| "Sin rol".to_string());
    let (status_class, status_text) = if user.is_active() {
        ("badge badge-success", "Activo")
    } else {
        ("badge badge-error", "Inactivo")
    };
    let phone = user.phone.clone().unwrap_or_default();
    let name = user.name.clone();
    let email = user.email.clone();

    view! {
        <tr>
            <td class="font-bold">{name}</td>
            <td>{email}</td>
            <td>{phone}</td>
            <td><span class="badge badge-outline">{role}</span></td>
            <td><span class=status_class>{status_text}</span></td>
            <td>
                <button
                    class="btn btn-ghost btn-sm gap-1 text-info"
                    on:click=move |_| screen.open_edit(user.clone())
                >
                    <Pencil attr:class="h-4 w-4" /> "Editar"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn UserModal(screen: UsersScreen) -> impl IntoView {
    let form = RwSignal::new(UserForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let modal = Memo::new(move |_| screen.read(|s| s.modal.clone()));
    let mode = move || modal.with(Modal::mode);

    // 每次打开时按模式重置表单
    Effect::new(move |_| {
        match modal.get() {
            Modal::Add => form.set(UserForm::default()),
            Modal::Edit(user) => form.set(UserForm::from_user(&user)),
            Modal::Closed => {}
        }
        errors.set(FormErrors::new());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = mode() else {
            return;
        };
        match form.with_untracked(|f| f.validate(mode)) {
            Ok(draft) => {
                errors.set(FormErrors::new());
                screen.submit(draft);
            }
            Err(e) => errors.set(e),
        }
    };

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let is_add = move || mode() == Some(ModalMode::Add);

    view! {
        <FormDialog
            open=Signal::derive(move || modal.with(Modal::is_open))
            title=Signal::derive(move || if is_add() { "Agregar usuario" } else { "Editar usuario" })
            on_close=move |_| screen.close_modal()
        >
            <form on:submit=on_submit class="space-y-2">
                <div class="form-control">
                    <label class="label" for="user_name"><span class="label-text">"Nombre"</span></label>
                    <input id="user_name" type="text" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError message=error_for("name") />
                </div>
                <div class="form-control">
                    <label class="label" for="user_email"><span class="label-text">"Email"</span></label>
                    <input id="user_email" type="email" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError message=error_for("email") />
                </div>
                <div class="form-control">
                    <label class="label" for="user_phone"><span class="label-text">"Teléfono"</span></label>
                    <input id="user_phone" type="tel" maxlength="10" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <FieldError message=error_for("phone") />
                </div>

                <Show when=is_add>
                    <div class="form-control">
                        <label class="label" for="user_password"><span class="label-text">"Contraseña"</span></label>
                        <input id="user_password" type="password" class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError message=error_for("password") />
                    </div>
                    <div class="form-control">
                        <label class="label" for="user_role"><span class="label-text">"Rol"</span></label>
                        <select id="user_role" class="select select-bordered w-full"
                            prop:value=move || form.with(|f| f.role.clone())
                            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        >
                            <option value="" disabled>"Selecciona un rol"</option>
                            {ROLE_OPTIONS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                        <FieldError message=error_for("role") />
                    </div>
                </Show>

                <DialogActions
                    submit_label="Guardar"
                    submitting=Signal::derive(move || screen.read(|s| s.submitting))
                    on_cancel=move |_| screen.close_modal()
                />
            </form>
        </FormDialog>
    }
}
