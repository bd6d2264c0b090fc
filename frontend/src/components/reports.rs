//! 报表列表页（只读）

use crate::components::toasts::Toasts;
use crate::components::widgets::{Pager, SearchBar, TablePlaceholder};
use crate::screen::use_screen;
use backoffice::collection::PAGE_SIZE;
use backoffice::resources::ReportsGateway;
use backoffice_shared::Report;
use backoffice_shared::date::format_datetime;
use leptos::prelude::*;

fn status_class(status: &str) -> &'static str {
    match status {
        "completado" => "badge badge-success",
        "pendiente" => "badge badge-error",
        "en proceso" => "badge badge-warning",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let screen = use_screen(ReportsGateway);
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

            <SearchBar
                placeholder="Buscar por tipo, descripción o responsable"
                on_search=move |q: String| {
                    screen.search(&q);
                    page.set(0);
                }
            />

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Tipo"</th>
                                <th>"Descripción"</th>
                                <th>"Fecha"</th>
                                <th>"Responsable"</th>
                                <th>"Estado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TablePlaceholder colspan=5 loading=loading empty=empty />
                            <For
                                each=rows
                                key=|r: &Report| r.id.clone()
                                children=|report: Report| {
                                    let class = status_class(&report.status);
                                    view! {
                                        <tr>
                                            <td class="font-bold">{report.kind}</td>
                                            <td>{report.description}</td>
                                            <td class="text-sm opacity-70">{format_datetime(&report.date)}</td>
                                            <td>{report.responsible}</td>
                                            <td><span class=class>{report.status.to_uppercase()}</span></td>
                                        </tr>
                                    }
                                }
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
        </div>
    }
}
