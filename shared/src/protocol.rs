use crate::{MenuEntry, Order, OrderLine, Product, ProductStatus, User, UserProfile};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Identifiers travel in the query string, everything else in the JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, without query string.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the bearer token.
    const AUTHENTICATED: bool = false;
    /// Whether the request is serialized as a JSON body.
    const HAS_BODY: bool = false;
    /// A 2xx body that is not a JSON array decodes as an empty list.
    const NON_ARRAY_IS_EMPTY: bool = false;

    /// Query string parameters, in order.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Mutations: any 2xx counts as success, whatever the body holds.
pub type StatusOnly = IgnoredAny;

// =========================================================
// Auth & Menu
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;
}

/// Menu entries for one role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuByRoleRequest {
    #[serde(skip)]
    pub role: String,
}

impl ApiRequest for MenuByRoleRequest {
    type Response = Vec<MenuEntry>;
    const PATH: &'static str = "/menu/getMenuByRole";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("role", self.role.clone())]
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<User>;
    const PATH: &'static str = "/user/getAllUsers";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Create a user. `role` is the single role type picked in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
}

impl ApiRequest for SaveUserRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/user/saveUser";
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;
}

/// Partial update of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ApiRequest for UpdateUserRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/user/updateUser";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const HAS_BODY: bool = true;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone())]
    }
}

// =========================================================
// Orders
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersRequest;

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const PATH: &'static str = "/order/getAllOrders";
    const METHOD: HttpMethod = HttpMethod::Get;
    const NON_ARRAY_IS_EMPTY: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub status: String,
    pub products: Vec<OrderLine>,
}

impl ApiRequest for CreateOrderRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/order/createOrder";
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProductsToOrderRequest {
    #[serde(skip)]
    pub order_id: String,
    pub products: Vec<OrderLine>,
}

impl ApiRequest for AddProductsToOrderRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/order/addProductsToOrder";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const HAS_BODY: bool = true;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("orderId", self.order_id.clone())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOrderRequest {
    #[serde(skip)]
    pub order_id: String,
}

impl ApiRequest for DeleteOrderRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/order/deleteOrder";
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("orderId", self.order_id.clone())]
    }
}

// =========================================================
// Products
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const PATH: &'static str = "/products/getAllProducts";
    const METHOD: HttpMethod = HttpMethod::Get;
    const NON_ARRAY_IS_EMPTY: bool = true;
}

/// Editable product fields, shared by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl ApiRequest for CreateProductRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/products/createProduct";
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub product_id: String,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl ApiRequest for UpdateProductRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/products/updateProduct";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const HAS_BODY: bool = true;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("productId", self.product_id.clone())]
    }
}

/// Soft delete: the server flags the product, nothing is sent in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductRequest {
    #[serde(skip)]
    pub product_id: String,
}

impl ApiRequest for DeleteProductRequest {
    type Response = StatusOnly;
    const PATH: &'static str = "/products/deleteProduct";
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("productId", self.product_id.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_ids_stay_out_of_body() {
        let req = UpdateProductRequest {
            product_id: "p1".into(),
            fields: ProductFields {
                name: "Widget".into(),
                description: String::new(),
                price: 2.5,
                quantity: 4,
                status: ProductStatus::Active,
            },
        };

        assert_eq!(req.query(), vec![("productId", "p1".to_string())]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "Widget",
                "description": "",
                "price": 2.5,
                "quantity": 4,
                "status": "activo"
            })
        );
    }

    #[test]
    fn test_create_order_body() {
        let req = CreateOrderRequest {
            user_id: "u1".into(),
            status: crate::ORDER_STATUS_PENDING.into(),
            products: vec![OrderLine {
                product_id: "p1".into(),
                quantity: 2,
                price: 10.0,
            }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "userId": "u1",
                "status": "pendiente",
                "products": [{ "productId": "p1", "quantity": 2, "price": 10.0 }]
            })
        );
    }

    #[test]
    fn test_partial_user_update_skips_missing_fields() {
        let req = UpdateUserRequest {
            id: "u1".into(),
            name: Some("Ana".into()),
            email: None,
            phone: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "name": "Ana" }));
    }

    #[test]
    fn test_login_response_shape() {
        let res: LoginResponse = serde_json::from_value(json!({
            "accessToken": "t0k",
            "user": { "_id": "u1", "name": "Ana", "role": [{ "type": "admin" }] }
        }))
        .unwrap();
        assert_eq!(res.access_token, "t0k");
        assert_eq!(res.user.primary_role(), Some("admin"));
    }

    #[test]
    fn test_status_only_accepts_any_body() {
        assert!(serde_json::from_str::<StatusOnly>("null").is_ok());
        assert!(serde_json::from_str::<StatusOnly>(r#"{"message":"ok"}"#).is_ok());
    }
}
