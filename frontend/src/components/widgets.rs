//! 列表页共用的小部件：检索框、分页、弹窗外壳、字段错误

use crate::components::icons::Search;
use leptos::prelude::*;

/// 检索框，提交时回调（回车或点击按钮）
#[component]
pub fn SearchBar(
    placeholder: &'static str,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get_untracked());
    };

    view! {
        <form class="join w-full md:w-[32rem]" on:submit=on_submit>
            <label class="input input-bordered join-item flex items-center gap-2 w-full">
                <Search attr:class="h-4 w-4 opacity-50" />
                <input
                    type="search"
                    class="grow"
                    placeholder=placeholder
                    prop:value=query
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        // 清空时立即恢复完整列表
                        if value.is_empty() {
                            on_search.run(String::new());
                        }
                        set_query.set(value);
                    }
                />
            </label>
            <button type="submit" class="btn btn-primary join-item">"Buscar"</button>
        </form>
    }
}

/// 分页器；`page` 从 0 开始
#[component]
pub fn Pager(page: RwSignal<usize>, #[prop(into)] page_count: Signal<usize>) -> impl IntoView {
    // 检索后页数变少时回到最后一页
    Effect::new(move |_| {
        let count = page_count.get();
        if page.get_untracked() >= count {
            page.set(count.saturating_sub(1));
        }
    });

    view! {
        <div class="join">
            <button
                class="join-item btn btn-sm"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "«"
            </button>
            <button class="join-item btn btn-sm btn-disabled">
                {move || format!("{} / {}", page.get() + 1, page_count.get())}
            </button>
            <button
                class="join-item btn btn-sm"
                disabled=move || page.get() + 1 >= page_count.get()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "»"
            </button>
        </div>
    }
}

/// 模态框外壳
///
/// 打开状态由调用方决定；用户按 Esc 关闭时回调 `on_close`。
#[component]
pub fn FormDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
        }
    });

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:close=move |_| {
                if open.get_untracked() {
                    on_close.run(());
                }
            }
        >
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                {children()}
            </div>
        </dialog>
    }
}

/// 字段下方的校验提示
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{text}</span>
                </label>
            }
        })
    }
}

/// 弹窗底部按钮
#[component]
pub fn DialogActions(
    submit_label: &'static str,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-action">
            <button type="button" class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                "Cancelar"
            </button>
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || submitting.get().then(|| view! { <span class="loading loading-spinner"></span> })}
                {submit_label}
            </button>
        </div>
    }
}

/// 列表为空或加载中时占满整行的提示
#[component]
pub fn TablePlaceholder(
    colspan: u32,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || empty.get()>
            <tr>
                <td colspan=colspan class="text-center py-8 text-base-content/50">
                    {move || if loading.get() {
                        view! { <span class="loading loading-spinner loading-md"></span> " Cargando..." }.into_any()
                    } else {
                        "Sin datos".into_any()
                    }}
                </td>
            </tr>
        </Show>
    }
}
