pub const QUERY_ITEMS: &str = r#"
    query companies($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
        companies {
            id
            name
            country
            city
            address
            position
            user {
                id
                email
            }
            createdAt
        }
    }
"#;

pub const QUERY_ITEM: &str = r#"
    query company($permissions: [String!]!, $id: ID!) {
        checkPermissions(permissions: $permissions)
        clients {
            id
            email
        }
        company(id: $id) {
            id
            name
            country
            city
            address
            position
            user {
                id
                email
            }
        }
    }
"#;

pub const CREATE_ITEM: &str = r#"
    query createCompany($permissions: [String!]!) {
        checkPermissions(permissions: $permissions)
        clients {
            id
            email
        }
    }
"#;

pub const ADD_ITEM: &str = r#"
    mutation addCompany(
        $name: String!
        $country: String!
        $city: String!
        $address: String!
        $position: String!
        $userId: Int!
    ) {
        addCompany(
            name: $name
            country: $country
            city: $city
            address: $address
            position: $position
            userId: $userId
        ) {
            company {
                id
                name
                country
                city
                address
                position
                user {
                    id
                    email
                }
                createdAt
            }
            field
            message
        }
    }
"#;

pub const UPDATE_ITEM: &str = r#"
    mutation updateCompany(
        $id: ID!
        $name: String!
        $country: String!
        $city: String!
        $address: String!
        $position: String!
        $userId: Int!
    ) {
        updateCompany(
            id: $id
            name: $name
            country: $country
            city: $city
            address: $address
            position: $position
            userId: $userId
        ) {
            company {
                id
                name
                country
                city
                address
                position
                user {
                    id
                    email
                }
                createdAt
            }
            field
            message
        }
    }
"#;

pub const DELETE_ITEM: &str = r#"
    mutation deleteCompany($id: ID!) {
        deleteCompany(id: $id) {
            status
            message
        }
    }
"#;
