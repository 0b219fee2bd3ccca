use contracts::domain::a001_category::aggregate::{Category, CategoriesData, CategoryData, CategoryDto};
use contracts::domain::a001_category::graphql::{
    ADD_ITEM, CREATE_ITEM, DELETE_ITEM, QUERY_ITEM, QUERY_ITEMS, UPDATE_ITEM,
};
use contracts::domain::common::{remove_by_id, upsert_by_id};
use contracts::shared::graphql::{
    ensure_permitted, single_root, ApiError, DeletePayload, IdVars, ItemVars, MutationOutcome,
    MutationPayload, PermissionVars,
};
use contracts::shared::permissions::ADMIN;
use std::collections::HashMap;

use crate::shared::data_access::DataAccess;

fn list_vars() -> PermissionVars {
    PermissionVars::new(ADMIN)
}

/// Список категорий (`refresh` загружает в обход кэша)
pub async fn fetch_categories(da: DataAccess, refresh: bool) -> Result<Vec<Category>, ApiError> {
    let data: CategoriesData = if refresh {
        da.fetch(QUERY_ITEMS, list_vars()).await?
    } else {
        da.query(QUERY_ITEMS, list_vars()).await?
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data.categories)
}

/// Данные формы: категория (в режиме редактирования) и список возможных родителей
pub async fn fetch_form(da: DataAccess, id: Option<String>) -> Result<CategoryData, ApiError> {
    let data: CategoryData = match id {
        Some(id) => da.fetch(QUERY_ITEM, ItemVars::new(ADMIN, Some(id))).await?,
        None => da.fetch(CREATE_ITEM, list_vars()).await?,
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data)
}

pub async fn save_category(
    da: DataAccess,
    dto: CategoryDto,
) -> Result<MutationOutcome<Category>, ApiError> {
    let document = if dto.id.is_some() { UPDATE_ITEM } else { ADD_ITEM };
    let data: HashMap<String, MutationPayload<Category>> = da.mutate(document, &dto).await?;
    let outcome = single_root(data)?.into_outcome();

    if let MutationOutcome::Saved(saved) = &outcome {
        let saved = saved.clone();
        da.update_cached(QUERY_ITEMS, &list_vars(), move |d: &mut CategoriesData| {
            upsert_by_id(&mut d.categories, saved);
        });
    }
    Ok(outcome)
}

pub async fn delete_category(da: DataAccess, id: String) -> Result<DeletePayload, ApiError> {
    let data: HashMap<String, DeletePayload> = da.mutate(DELETE_ITEM, IdVars { id: id.clone() }).await?;
    let payload = single_root(data)?;

    if payload.status {
        da.update_cached(QUERY_ITEMS, &list_vars(), |d: &mut CategoriesData| {
            remove_by_id(&mut d.categories, &id);
        });
    }
    Ok(payload)
}
