use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::ShieldCheck;
use crate::components::toasts::use_notices;
use crate::components::widgets::FieldError;
use backoffice::auth::SignInError;
use backoffice::forms::{FormErrors, LoginForm};
use backoffice::notify::{LOGIN_FAILED, Notification, welcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let notices = use_notices();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let submitted = form.get_untracked();
        spawn_local(async move {
            // 成功后会话信号变化，路由服务负责离开登录页
            match auth.login(&api, &submitted).await {
                Ok(user) => {
                    errors.set(FormErrors::new());
                    notices.push(Notification::success(format!(
                        "¡Bienvenido! {}",
                        welcome(user.display_name())
                    )));
                }
                Err(SignInError::Invalid(e)) => errors.set(e),
                Err(SignInError::Failed(_)) => {
                    set_error_msg.set(Some(LOGIN_FAILED));
                    notices.push(Notification::error(LOGIN_FAILED));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Iniciar sesión"</h1>
                        <p class="text-base-content/70">"Ingresa tus credenciales para continuar"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || error_msg.get().map(|text| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span class="font-bold">"Error de autenticación"</span>
                                <span>{text}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo electrónico"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="tu@ejemplo.com"
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.email.clone())
                                class="input input-bordered"
                            />
                            <FieldError message=error_for("email") />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Tu contraseña"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                            />
                            <FieldError message=error_for("password") />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "Iniciar sesión".into_any()
                                }}
                            </button>
                        </div>

                        <div class="divider text-sm text-base-content/50">"o"</div>

                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| {
                                form.set(LoginForm::demo());
                                errors.set(FormErrors::new());
                            }
                        >
                            "Usar credenciales de demostración"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
