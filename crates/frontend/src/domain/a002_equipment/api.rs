use contracts::domain::a002_equipment::aggregate::{Equipment, EquipmentListData};
use contracts::domain::a002_equipment::graphql::{DELETE_ITEM, QUERY_ITEMS};
use contracts::domain::common::remove_by_id;
use contracts::shared::graphql::{
    ensure_permitted, single_root, ApiError, DeletePayload, IdVars, PermissionVars,
};
use contracts::shared::permissions::ADMIN;
use std::collections::HashMap;

use crate::shared::data_access::DataAccess;

fn list_vars() -> PermissionVars {
    PermissionVars::new(ADMIN)
}

pub async fn fetch_equipment(da: DataAccess, refresh: bool) -> Result<Vec<Equipment>, ApiError> {
    let data: EquipmentListData = if refresh {
        da.fetch(QUERY_ITEMS, list_vars()).await?
    } else {
        da.query(QUERY_ITEMS, list_vars()).await?
    };
    ensure_permitted(data.check_permissions)?;
    Ok(data.items)
}

pub async fn delete_equipment(da: DataAccess, id: String) -> Result<DeletePayload, ApiError> {
    let data: HashMap<String, DeletePayload> = da.mutate(DELETE_ITEM, IdVars { id: id.clone() }).await?;
    let payload = single_root(data)?;

    if payload.status {
        da.update_cached(QUERY_ITEMS, &list_vars(), |d: &mut EquipmentListData| {
            remove_by_id(&mut d.items, &id);
        });
    }
    Ok(payload)
}
