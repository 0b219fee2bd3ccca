pub const QUERY_ITEMS: &str = r#"
    query categories($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
        categories {
            id
            titleRU
            titleEN
            parent {
                id
                titleRU
                titleEN
            }
            createdAt
        }
    }
"#;

pub const QUERY_ITEM: &str = r#"
    query category($permissions: [String!]!, $id: ID!) {
        checkPermissions(permissions: $permissions)
        categories {
            id
            titleRU
            titleEN
        }
        category(id: $id) {
            id
            titleRU
            titleEN
            parent {
                id
                titleRU
                titleEN
            }
            createdAt
        }
    }
"#;

pub const CREATE_ITEM: &str = r#"
    query createCategory($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
        categories {
            id
            titleRU
            titleEN
        }
    }
"#;

pub const ADD_ITEM: &str = r#"
    mutation addCategory($titleRU: String!, $titleEN: String!, $parentId: ID) {
        addCategory(titleRU: $titleRU, titleEN: $titleEN, parentId: $parentId) {
            category {
                id
                titleRU
                titleEN
                parent {
                    id
                    titleRU
                    titleEN
                }
                createdAt
            }
            field
            message
        }
    }
"#;

pub const UPDATE_ITEM: &str = r#"
    mutation updateCategory($id: ID!, $titleRU: String!, $titleEN: String!, $parentId: ID) {
        updateCategory(id: $id, titleRU: $titleRU, titleEN: $titleEN, parentId: $parentId) {
            category {
                id
                titleRU
                titleEN
                parent {
                    id
                    titleRU
                    titleEN
                }
                createdAt
            }
            field
            message
        }
    }
"#;

pub const DELETE_ITEM: &str = r#"
    mutation deleteCategory($id: ID!) {
        deleteCategory(id: $id) {
            status
            message
        }
    }
"#;
