use leptos::prelude::*;

/// Текстовое поле формы с подписью и сообщением об ошибке
#[component]
pub fn TextField(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = name.clone();
    view! {
        <div class="form-group" class:form-group--error=move || error.with(|e| e.is_some())>
            <label for=name.clone()>{move || label.get()}</label>
            <input
                type="text"
                id=input_id
                name=name
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
        </div>
    }
}

/// Вариант выпадающего списка: (значение, подпись)
pub type SelectOption = (String, String);

/// Выпадающий список формы; пустое значение означает «не выбрано»
#[component]
pub fn SelectField(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let select_id = name.clone();
    view! {
        <div class="form-group" class:form-group--error=move || error.with(|e| e.is_some())>
            <label for=name.clone()>{move || label.get()}</label>
            <select
                id=select_id
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"—"</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let is_selected = option_value == selected;
                            view! {
                                <option value=option_value selected=is_selected>{option_label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
        </div>
    }
}
