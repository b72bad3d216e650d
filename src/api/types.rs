//! Domain DTOs mirroring the JSONPlaceholder wire schema.
//!
//! Field names follow Rust conventions; serde renames cover the camelCase
//! fields the API uses (`catchPhrase`, `userId`). Values are immutable once
//! fetched — identity is the numeric `id`.

use serde::Deserialize;

/// A user record returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// A to-do item returned by `GET /todos?userId=<id>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn user_deserializes_from_wire_schema() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn todo_maps_user_id_field() {
        let json = r#"{"userId": 1, "id": 5, "title": "laboriosam mollitia", "completed": false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.id, 5);
        assert!(!todo.completed);
    }
}
