use std::sync::Arc;

use auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
use logger::TracingLogger;
use persistence::address::repository::AddressRepositoryPostgres;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::address::create::CreateAddressUseCaseImpl;
use business::application::address::delete::DeleteAddressUseCaseImpl;
use business::application::address::get_all::GetAllAddressesUseCaseImpl;
use business::application::address::get_default::GetDefaultAddressUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::get_by_status::GetOrdersByStatusUseCaseImpl;
use business::application::order::get_user_orders::GetUserOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::bootstrap_admin::BootstrapAdminUseCaseImpl;
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::update_profile::UpdateProfileUseCaseImpl;
use business::domain::user::use_cases::bootstrap_admin::{
    BootstrapAdminParams, BootstrapAdminUseCase,
};

use crate::api::address::routes::AddressApi;
use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserApi;
use crate::config::admin_config::AdminConfig;

pub struct DependencyContainer {
    pub token_service: Arc<JwtTokenService>,
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub user_api: UserApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub address_api: AddressApi,
    pub order_api: OrderApi,
    bootstrap_admin_use_case: Arc<dyn BootstrapAdminUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, jwt: &JwtConfig) -> anyhow::Result<Self> {
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let address_repository = Arc::new(AddressRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        let password_hasher = Arc::new(Argon2PasswordHasher);
        let token_service = Arc::new(JwtTokenService::new(jwt)?);

        // User use cases
        let user_logger = Arc::new(TracingLogger::new("user"));
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            token_issuer: token_service.clone(),
            logger: user_logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            token_issuer: token_service.clone(),
            logger: user_logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger.clone(),
        });
        let bootstrap_admin_use_case = Arc::new(BootstrapAdminUseCaseImpl {
            repository: user_repository,
            password_hasher,
            logger: user_logger,
        });

        // Product use cases
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let search_products_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger,
        });

        // Cart use cases
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let update_cart_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger,
        });

        // Address use cases
        let address_logger = Arc::new(TracingLogger::new("address"));
        let create_address_use_case = Arc::new(CreateAddressUseCaseImpl {
            repository: address_repository.clone(),
            logger: address_logger.clone(),
        });
        let get_addresses_use_case = Arc::new(GetAllAddressesUseCaseImpl {
            repository: address_repository.clone(),
            logger: address_logger.clone(),
        });
        let get_default_address_use_case = Arc::new(GetDefaultAddressUseCaseImpl {
            repository: address_repository.clone(),
            logger: address_logger.clone(),
        });
        let delete_address_use_case = Arc::new(DeleteAddressUseCaseImpl {
            repository: address_repository.clone(),
            logger: address_logger,
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            order_repository: order_repository.clone(),
            cart_repository,
            address_repository,
            product_repository,
            logger: Arc::new(TracingLogger::new("checkout")),
        });
        let order_logger = Arc::new(TracingLogger::new("order"));
        let get_order_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let get_user_orders_use_case = Arc::new(GetUserOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let get_orders_by_status_use_case = Arc::new(GetOrdersByStatusUseCaseImpl {
            repository: order_repository,
            logger: order_logger,
        });

        Ok(Self {
            token_service,
            health_api,
            auth_api: AuthApi::new(register_use_case, login_use_case),
            user_api: UserApi::new(get_profile_use_case, update_profile_use_case),
            product_api: ProductApi::new(
                search_products_use_case,
                get_product_use_case,
                create_product_use_case,
                update_product_use_case,
                delete_product_use_case,
            ),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_cart_item_use_case,
                update_cart_item_use_case,
                remove_cart_item_use_case,
                clear_cart_use_case,
            ),
            address_api: AddressApi::new(
                create_address_use_case,
                get_addresses_use_case,
                get_default_address_use_case,
                delete_address_use_case,
            ),
            order_api: OrderApi::new(
                place_order_use_case,
                get_order_use_case,
                get_user_orders_use_case,
                update_order_status_use_case,
                get_orders_by_status_use_case,
            ),
            bootstrap_admin_use_case,
        })
    }

    /// Creates the configured admin account when no user holds that email.
    pub async fn bootstrap_admin(&self, admin: Option<&AdminConfig>) -> anyhow::Result<()> {
        let Some(admin) = admin else {
            tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
            return Ok(());
        };

        let created = self
            .bootstrap_admin_use_case
            .execute(BootstrapAdminParams {
                email: admin.email.clone(),
                password: admin.password.clone(),
            })
            .await?;

        if created {
            tracing::info!(email = %admin.email, "admin account created");
        }
        Ok(())
    }
}
