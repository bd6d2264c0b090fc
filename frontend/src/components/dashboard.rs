use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::router::Link;
use backoffice::route::AppRoute;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session.with(|s| {
            let name = s.user.as_ref().map(|u| u.display_name()).unwrap_or_default();
            format!("Hola {name}")
        })
    };

    view! {
        <div class="space-y-8">
            <div class="hero bg-base-100 rounded-box shadow-xl">
                <div class="hero-content text-center py-10">
                    <div class="max-w-md">
                        <h1 class="text-3xl font-bold">{greeting}</h1>
                        <p class="py-4 text-base-content/70">
                            "Selecciona una sección del menú para comenzar."
                        </p>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                <SectionCard route=AppRoute::Users>
                    <Team attr:class="h-8 w-8" />
                </SectionCard>
                <SectionCard route=AppRoute::Orders>
                    <ShoppingCart attr:class="h-8 w-8" />
                </SectionCard>
                <SectionCard route=AppRoute::Products>
                    <Appstore attr:class="h-8 w-8" />
                </SectionCard>
                <SectionCard route=AppRoute::Reports>
                    <FileText attr:class="h-8 w-8" />
                </SectionCard>
            </div>
        </div>
    }
}

#[component]
fn SectionCard(route: AppRoute, children: Children) -> impl IntoView {
    view! {
        <Link route=route class=Signal::derive(|| "card bg-base-100 shadow hover:shadow-xl transition-shadow".to_string())>
            <div class="card-body flex-row items-center gap-4">
                <div class="p-3 bg-primary/10 rounded-2xl text-primary">{children()}</div>
                <h3 class="card-title">{route.title()}</h3>
            </div>
        </Link>
    }
}
