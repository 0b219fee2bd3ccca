//! Наборы ролей, передаваемые в `checkPermissions` каждого запроса

pub const ADMIN: &[&str] = &["admin"];

pub const MASTER_ROLES: &[&str] = &[
    "master farm",
    "master store",
    "master equipment",
    "master finance",
    "master delivery",
    "master marketing",
];
