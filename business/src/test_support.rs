use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use uuid::Uuid;

use crate::domain::address::model::{Address, NewAddressProps};
use crate::domain::address::repository::AddressRepository;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductFilter;
use crate::domain::shared::identity::{Identity, Role};
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{AccessToken, PasswordHasher, TokenIssuer};
use crate::domain::user::value_objects::Email;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn search(&self, filter: &ProductFilter, page: &PageRequest) -> Result<Page<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<bool, RepositoryError>;
        async fn increment_stock(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn delete_by_user_id(&self, user_id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub AddressRepo {}

    #[async_trait]
    impl AddressRepository for AddressRepo {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Address, RepositoryError>;
        async fn find_default(&self, user_id: &UserId) -> Result<Option<Address>, RepositoryError>;
        async fn count_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        async fn clear_default(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        async fn save(&self, address: &Address) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn find_by_user_id(&self, user_id: &UserId, page: &PageRequest) -> Result<Page<Order>, RepositoryError>;
        async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
        async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &str) -> Result<String, UserError>;
        fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenIssuer for Tokens {
        fn issue(&self, user: &User) -> Result<AccessToken, UserError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub fn customer() -> Identity {
    Identity::new(UserId::generate(), vec![Role::User])
}

pub fn admin() -> Identity {
    Identity::new(UserId::generate(), vec![Role::Admin, Role::User])
}

pub fn product(name: &str, price: &str, stock: i32) -> Product {
    Product::new(NewProductProps {
        name: name.to_string(),
        description: None,
        price: dec(price),
        stock_quantity: stock,
        category: Some("Books".to_string()),
        images: vec![format!("{}.jpg", name.to_lowercase().replace(' ', "-"))],
        active: true,
    })
    .unwrap()
}

pub fn address(user_id: UserId, is_default: bool) -> Address {
    Address::new(NewAddressProps {
        user_id,
        street: "123 Main St".to_string(),
        city: "Springfield".to_string(),
        state: Some("IL".to_string()),
        zip_code: "62701".to_string(),
        country: "US".to_string(),
        is_default,
    })
    .unwrap()
}

pub fn cart_with(user_id: UserId, lines: &[(&Product, i32)]) -> Cart {
    let mut cart = Cart::empty(user_id);
    for (product, quantity) in lines {
        cart.add_item(product, *quantity).unwrap();
    }
    cart
}
