use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::api_utils::graphql_endpoint;
use crate::shared::data_access::provide_data_access;
use crate::shared::i18n::{browser_locale, AppContext};

#[component]
pub fn App() -> impl IntoView {
    // Язык интерфейса и доступ к API для всего приложения
    provide_context(AppContext::new(browser_locale()));
    provide_data_access(graphql_endpoint());

    view! {
        <AppRoutes />
    }
}
