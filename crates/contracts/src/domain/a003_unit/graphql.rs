pub const QUERY_ITEMS: &str = r#"
    query units($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
        units {
            id
            titleRU
            titleEN
            createdAt
        }
    }
"#;

pub const QUERY_ITEM: &str = r#"
    query unit($permissions: [String!]!, $id: ID!) {
        checkPermissions(permissions: $permissions)
        unit(id: $id) {
            id
            titleRU
            titleEN
            createdAt
        }
    }
"#;

/// Запрос формы создания: только проверка прав
pub const CREATE_ITEM: &str = r#"
    query createUnit($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
    }
"#;

pub const ADD_ITEM: &str = r#"
    mutation addUnit($titleRU: String!, $titleEN: String!) {
        addUnit(titleRU: $titleRU, titleEN: $titleEN) {
            unit {
                id
                titleRU
                titleEN
                createdAt
            }
            field
            message
        }
    }
"#;

pub const UPDATE_ITEM: &str = r#"
    mutation updateUnit($id: ID!, $titleRU: String!, $titleEN: String!) {
        updateUnit(id: $id, titleRU: $titleRU, titleEN: $titleEN) {
            unit {
                id
                titleRU
                titleEN
                createdAt
            }
            field
            message
        }
    }
"#;

pub const DELETE_ITEM: &str = r#"
    mutation deleteUnit($id: ID!) {
        deleteUnit(id: $id) {
            status
            message
        }
    }
"#;
