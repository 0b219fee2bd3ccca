use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;

/// (путь, ID подписи, иконка)
const MENU_ITEMS: &[(&str, &str, &str)] = &[
    ("/categories", "categories.title", "folder"),
    ("/equipment", "equipment.title", "package"),
    ("/units", "units.title", "ruler"),
    ("/companies", "companies.title", "building"),
];

/// Пункт меню активен на своей странице и на вложенных (формах)
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let locale = use_locale();
    let pathname = use_location().pathname;

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {MENU_ITEMS
                    .iter()
                    .map(|&(href, label_id, icon_name)| {
                        let active = move || pathname.with(|p| is_active(p, href));
                        view! {
                            <li class="sidebar__item" class:sidebar__item--active=active>
                                <a class="sidebar__link" href=href>
                                    {icon(icon_name)}
                                    <span>{move || t(locale.get(), label_id)}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_menu_item() {
        assert!(is_active("/units", "/units"));
        assert!(is_active("/units/unit/5", "/units"));
        assert!(!is_active("/unitsx", "/units"));
        assert!(!is_active("/categories", "/units"));
    }
}
