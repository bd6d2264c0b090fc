use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "token";
pub const STORAGE_USER_KEY: &str = "user";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 新建订单的初始状态
pub const ORDER_STATUS_PENDING: &str = "pendiente";

// =========================================================
// 会话模型 (Session Models)
// =========================================================

/// 角色描述，只有 `type` 字段被消费
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
}

impl RoleDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// 已登录用户的资料
///
/// 未知字段会被忽略；`role` 的结构不符时整个资料被拒绝。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Vec<RoleDescriptor>,
}

impl UserProfile {
    /// 第一个角色的类型。多角色时的优先级未定义，只看 `role[0]`。
    pub fn primary_role(&self) -> Option<&str> {
        self.role
            .first()
            .map(|r| r.kind.as_str())
            .filter(|kind| !kind.is_empty())
    }

    /// 欢迎语中使用的显示名
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "usuario"
        } else {
            &self.name
        }
    }
}

/// 服务端按角色下发的菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

// =========================================================
// 资源记录 (Resource Records)
// =========================================================

/// 可在列表中展示、检索的记录
pub trait Record: Clone {
    /// 服务端分配的标识
    fn record_id(&self) -> &str;

    /// 参与客户端检索的字段
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Vec<RoleDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl User {
    /// 表格中展示的角色列表，如 "admin, user"
    pub fn role_label(&self) -> Option<String> {
        if self.role.is_empty() {
            None
        } else {
            Some(
                self.role
                    .iter()
                    .map(|r| r.kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.unwrap_or(false)
    }
}

impl Record for User {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// 订单中的一行商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub fk_user: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub products: Vec<OrderLine>,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == ORDER_STATUS_PENDING
    }
}

impl Record for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.status]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "activo",
            ProductStatus::Inactive => "inactivo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Activo",
            ProductStatus::Inactive => "Inactivo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "activo" => Some(ProductStatus::Active),
            "inactivo" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: String,
    pub responsible: String,
    pub status: String,
}

impl Record for Report {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.kind, &self.description, &self.responsible]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "password": "hash",
            "role": [{ "type": "admin", "_id": "r1" }]
        }))
        .unwrap();

        assert_eq!(profile.id.as_deref(), Some("u1"));
        assert_eq!(profile.primary_role(), Some("admin"));
    }

    #[test]
    fn test_profile_rejects_malformed_role() {
        let res = serde_json::from_value::<UserProfile>(json!({
            "name": "Ana",
            "role": "admin"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_primary_role_only_reads_first_entry() {
        let profile = UserProfile {
            id: None,
            name: String::new(),
            email: String::new(),
            phone: None,
            role: vec![RoleDescriptor::new(""), RoleDescriptor::new("admin")],
        };
        assert_eq!(profile.primary_role(), None);
        assert_eq!(profile.display_name(), "usuario");
    }

    #[test]
    fn test_product_status_wire_format() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Widget",
            "price": 10.5,
            "quantity": 3,
            "status": "inactivo",
            "createdAt": "2025-07-01T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(product.status, ProductStatus::Inactive);
        assert_eq!(product.description, "");
        assert_eq!(product.search_fields(), vec!["Widget", ""]);
    }

    #[test]
    fn test_order_lines_use_camel_case() {
        let line = OrderLine {
            product_id: "p1".into(),
            quantity: 2,
            price: 10.0,
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({ "productId": "p1", "quantity": 2, "price": 10.0 })
        );
    }

    #[test]
    fn test_user_role_label() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "role": [{ "type": "admin" }, { "type": "user" }],
            "status": true
        }))
        .unwrap();
        assert_eq!(user.role_label().as_deref(), Some("admin, user"));
        assert!(user.is_active());
    }
}
