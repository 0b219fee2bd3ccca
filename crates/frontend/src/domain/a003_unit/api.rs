use contracts::domain::a003_unit::aggregate::{Unit, UnitData, UnitDto, UnitsData};
use contracts::domain::a003_unit::graphql::{
    ADD_ITEM, CREATE_ITEM, DELETE_ITEM, QUERY_ITEM, QUERY_ITEMS, UPDATE_ITEM,
};
use contracts::domain::common::{remove_by_id, upsert_by_id};
use contracts::shared::graphql::{
    ensure_permitted, single_root, ApiError, DeletePayload, IdVars, ItemVars, MutationOutcome,
    MutationPayload, PermissionVars,
};
use contracts::shared::permissions::MASTER_ROLES;
use std::collections::HashMap;

use crate::shared::data_access::DataAccess;

fn list_vars() -> PermissionVars {
    PermissionVars::new(MASTER_ROLES)
}

pub async fn fetch_units(da: DataAccess, refresh: bool) -> Result<Vec<Unit>, ApiError> {
    let data: UnitsData = if refresh {
        da.fetch(QUERY_ITEMS, list_vars()).await?
    } else {
        da.query(QUERY_ITEMS, list_vars()).await?
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data.units)
}

/// Данные формы. Без `id` запрос только проверяет права на создание.
pub async fn fetch_form(da: DataAccess, id: Option<String>) -> Result<UnitData, ApiError> {
    let data: UnitData = match id {
        Some(id) => da.fetch(QUERY_ITEM, ItemVars::new(MASTER_ROLES, Some(id))).await?,
        None => da.fetch(CREATE_ITEM, list_vars()).await?,
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data)
}

pub async fn save_unit(da: DataAccess, dto: UnitDto) -> Result<MutationOutcome<Unit>, ApiError> {
    let document = if dto.id.is_some() { UPDATE_ITEM } else { ADD_ITEM };
    let data: HashMap<String, MutationPayload<Unit>> = da.mutate(document, &dto).await?;
    let outcome = single_root(data)?.into_outcome();

    if let MutationOutcome::Saved(saved) = &outcome {
        let saved = saved.clone();
        da.update_cached(QUERY_ITEMS, &list_vars(), move |d: &mut UnitsData| {
            upsert_by_id(&mut d.units, saved);
        });
    }
    Ok(outcome)
}

pub async fn delete_unit(da: DataAccess, id: String) -> Result<DeletePayload, ApiError> {
    let data: HashMap<String, DeletePayload> = da.mutate(DELETE_ITEM, IdVars { id: id.clone() }).await?;
    let payload = single_root(data)?;

    if payload.status {
        da.update_cached(QUERY_ITEMS, &list_vars(), |d: &mut UnitsData| {
            remove_by_id(&mut d.units, &id);
        });
    }
    Ok(payload)
}
