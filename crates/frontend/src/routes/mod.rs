use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_category::ui::details::CategoryDetailsPage;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_equipment::ui::list::EquipmentList;
use crate::domain::a003_unit::ui::details::UnitDetailsPage;
use crate::domain::a003_unit::ui::list::UnitList;
use crate::domain::a004_company::ui::details::CompanyDetailsPage;
use crate::domain::a004_company::ui::list::CompanyList;
use crate::layout::Shell;
use crate::shared::components::Empty;
use crate::shared::i18n::{t, use_locale};

#[component]
fn NotFound() -> impl IntoView {
    let locale = use_locale();
    move || view! { <Empty message=t(locale.get(), "app.notFound") /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/categories" /> } />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/categories/category") view=CategoryDetailsPage />
                    <Route path=path!("/categories/category/:id") view=CategoryDetailsPage />
                    <Route path=path!("/equipment") view=EquipmentList />
                    <Route path=path!("/units") view=UnitList />
                    <Route path=path!("/units/unit") view=UnitDetailsPage />
                    <Route path=path!("/units/unit/:id") view=UnitDetailsPage />
                    <Route path=path!("/companies") view=CompanyList />
                    <Route path=path!("/companies/company") view=CompanyDetailsPage />
                    <Route path=path!("/companies/company/:id") view=CompanyDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
