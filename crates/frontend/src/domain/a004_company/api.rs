use contracts::domain::a004_company::aggregate::{CompaniesData, Company, CompanyData, CompanyDto};
use contracts::domain::a004_company::graphql::{
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

pub async fn fetch_companies(da: DataAccess, refresh: bool) -> Result<Vec<Company>, ApiError> {
    let data: CompaniesData = if refresh {
        da.fetch(QUERY_ITEMS, list_vars()).await?
    } else {
        da.query(QUERY_ITEMS, list_vars()).await?
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data.companies)
}

/// Данные формы: компания (в режиме редактирования) и клиенты для выбора владельца
pub async fn fetch_form(da: DataAccess, id: Option<String>) -> Result<CompanyData, ApiError> {
    let data: CompanyData = match id {
        Some(id) => da.fetch(QUERY_ITEM, ItemVars::new(ADMIN, Some(id))).await?,
        None => da.fetch(CREATE_ITEM, list_vars()).await?,
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data)
}

pub async fn save_company(
    da: DataAccess,
    dto: CompanyDto,
) -> Result<MutationOutcome<Company>, ApiError> {
    let document = if dto.id.is_some() { UPDATE_ITEM } else { ADD_ITEM };
    let data: HashMap<String, MutationPayload<Company>> = da.mutate(document, &dto).await?;
    let outcome = single_root(data)?.into_outcome();

    if let MutationOutcome::Saved(saved) = &outcome {
        let saved = saved.clone();
        da.update_cached(QUERY_ITEMS, &list_vars(), move |d: &mut CompaniesData| {
            upsert_by_id(&mut d.companies, saved);
        });
    }
    Ok(outcome)
}

pub async fn delete_company(da: DataAccess, id: String) -> Result<DeletePayload, ApiError> {
    let data: HashMap<String, DeletePayload> = da.mutate(DELETE_ITEM, IdVars { id: id.clone() }).await?;
    let payload = single_root(data)?;

    if payload.status {
        da.update_cached(QUERY_ITEMS, &list_vars(), |d: &mut CompaniesData| {
            remove_by_id(&mut d.companies, &id);
        });
    }
    Ok(payload)
}
