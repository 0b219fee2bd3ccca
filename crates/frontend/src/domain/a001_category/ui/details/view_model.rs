use contracts::domain::a001_category::aggregate::CategoryDto;
use contracts::domain::common::{Locale, LocalizedTitle};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api;
use crate::shared::data_access::DataAccess;
use crate::shared::form_state::{route_save_result, SaveResult};
use crate::shared::i18n::{field_error_text, t};
use crate::shared::list_state::Snackbar;

/// ViewModel формы категории
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    /// Категории, доступные как родитель (без самой редактируемой)
    pub parents: RwSignal<Vec<LocalizedTitle>>,
    pub errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub snackbar: RwSignal<Snackbar>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            parents: RwSignal::new(Vec::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
            snackbar: RwSignal::new(Snackbar::default()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, locale: Locale, field: &str) -> Option<String> {
        self.errors
            .with(|errors| errors.get(field).map(|e| field_error_text(locale, e)))
    }

    pub fn load(&self, data_access: DataAccess, id: Option<String>) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_form(data_access, id).await {
                Ok(data) => {
                    let own_id = data.category.as_ref().map(|c| c.id.clone());
                    if let Some(category) = data.category.as_ref() {
                        vm.form.set(CategoryDto::from(category));
                    }
                    vm.parents.set(
                        data.categories
                            .into_iter()
                            .filter(|p| Some(&p.id) != own_id.as_ref())
                            .collect(),
                    );
                }
                Err(e) => vm.load_error.set(Some(e.to_string())),
            }
            vm.loading.set(false);
        });
    }

    /// Проверить и сохранить форму. `on_created` получает ID новой записи.
    pub fn save_command(
        &self,
        data_access: DataAccess,
        locale: Locale,
        on_created: impl Fn(String) + 'static,
    ) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            let is_new = current.id.is_none();
            let result = api::save_category(data_access, current).await;
            vm.saving.set(false);
            match route_save_result(locale, |saved| saved.id.clone(), is_new, result) {
                SaveResult::Created(id) => on_created(id),
                SaveResult::Updated(saved) => {
                    vm.form.set(CategoryDto::from(&saved));
                    vm.snackbar
                        .set(Snackbar::success(t(locale, "app.updatedSuccessfully")));
                }
                SaveResult::FieldRejected(error) => vm.errors.update(|e| e.push(error)),
                SaveResult::Failed(text) => vm.snackbar.set(Snackbar::error(text)),
            }
        });
    }
}
