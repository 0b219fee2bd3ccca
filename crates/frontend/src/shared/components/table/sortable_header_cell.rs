//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label=t(locale, "categories.name")
//!     sort_field=title_key.to_string()
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.request_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::SortState;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Показывает индикатор сортировки (▲▼) и передаёт ключ поля в `on_sort` по клику.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ поля для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    /// Можно ли изменять размер колонки
    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();
    let field_for_class = sort_field.clone();
    let field_for_direction = sort_field;

    let handle_click = move |_| {
        on_sort.run(field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell
            resizable=resizable
            min_width=min_width
            class="resizable"
        >
            <div
                class="table__sortable-header"
                style=header_style
                data-sort=move || {
                    sort.with(|s| s.is_active(&field_for_direction).then(|| s.direction.as_str()))
                }
                on:click=handle_click
            >
                {label}
                <span class=move || sort.with(|s| s.indicator_class(&field_for_class))>
                    {move || sort.with(|s| s.indicator(&field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
