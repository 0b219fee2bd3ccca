pub mod sidebar;
pub mod top_bar;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

use crate::shared::i18n::use_app_context;

/// Каркас приложения.
///
/// ```text
/// +------------------------------+
/// |            TopBar            |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.sidebar_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
