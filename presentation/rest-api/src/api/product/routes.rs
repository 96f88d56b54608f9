use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::sort::SortKey;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::insert::{InsertProductParams, InsertProductUseCase};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::list_by_user::{
    ListUserProductsParams, ListUserProductsUseCase,
};
use business::domain::product::use_cases::list_wished::{
    ListWishedProductsParams, ListWishedProductsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    InsertProductForm, ProductDocument, ProductPageResponse, ProductResponse,
    UpdateProductRequest, read_upload,
};
use crate::api::security::ActorId;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    insert_use_case: Arc<dyn InsertProductUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    list_by_user_use_case: Arc<dyn ListUserProductsUseCase>,
    list_wished_use_case: Arc<dyn ListWishedProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        insert_use_case: Arc<dyn InsertProductUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        list_by_user_use_case: Arc<dyn ListUserProductsUseCase>,
        list_wished_use_case: Arc<dyn ListWishedProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            insert_use_case,
            get_by_id_use_case,
            list_use_case,
            list_by_user_use_case,
            list_wished_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_user_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("InvalidArgument", "product.invalid_user_id"))
}

/// Product listing API
///
/// Endpoints for publishing, browsing and managing marketplace listings.
#[OpenApi]
impl ProductApi {
    /// Publish a product
    ///
    /// Uploads the images, then stores the listing. The document's `userId`
    /// must be the caller.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn insert_product(&self, actor: ActorId, form: InsertProductForm) -> InsertProductResponse {
        let document = match ProductDocument::parse(&form.json) {
            Ok(document) => document,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected product document");
                return InsertProductResponse::BadRequest(Json(ErrorResponse::new(
                    "InvalidArgument",
                    "product.invalid_document",
                )));
            }
        };
        let Some(owner) = UserId::parse(&document.user_id) else {
            return InsertProductResponse::BadRequest(invalid_user_id());
        };

        let mut files = Vec::with_capacity(form.files.len());
        for upload in form.files {
            match read_upload(upload).await {
                Ok(file) => files.push(file),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to read uploaded file");
                    return InsertProductResponse::BadRequest(Json(ErrorResponse::new(
                        "InvalidArgument",
                        "product.unreadable_file",
                    )));
                }
            }
        }

        let params = InsertProductParams {
            actor: actor.0,
            owner,
            content: document.content(),
            files,
        };

        match self.insert_use_case.execute(params).await {
            Ok(product) => InsertProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => InsertProductResponse::BadRequest(json),
                    403 => InsertProductResponse::Forbidden(json),
                    422 => InsertProductResponse::UnprocessableEntity(json),
                    _ => InsertProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Browse products
    ///
    /// Cursor-paginated catalog. `sort` is one of `price`, `pricedesc`, `id`,
    /// `iddesc` (default); pass the previous page's `next` as `last`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        /// Case-insensitive title substring
        keyword: Query<Option<String>>,
        /// Page size (default: 10)
        size: Query<Option<i64>>,
        /// Category identifier
        category: Query<Option<i32>>,
        /// Cursor from the previous page
        last: Query<Option<String>>,
        /// Sort key
        sort: Query<Option<String>>,
    ) -> ListProductsResponse {
        let params = ListProductsParams {
            keyword: keyword.0,
            category: category.0,
            sort: SortKey::resolve(sort.0.as_deref()),
            last: last.0,
            size: size.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(ProductPageResponse::from_page(page, None))),
            Err(err) => err.into(),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces title, price and category. Only the owner may update.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        actor: ActorId,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            actor: actor.0,
            content: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    422 => UpdateProductResponse::UnprocessableEntity(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the listing and every wish pointing at it. Only the owner may delete.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, actor: ActorId, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
                actor: actor.0,
            })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List a user's products
    #[oai(path = "/users/:user_id/products", method = "get", tag = "ApiTags::Products")]
    async fn list_user_products(
        &self,
        user_id: Path<String>,
        /// Page size (default: 10)
        size: Query<Option<i64>>,
        /// Cursor from the previous page
        last: Query<Option<String>>,
        /// Sort key
        sort: Query<Option<String>>,
    ) -> ListProductsResponse {
        let Some(user_id) = UserId::parse(&user_id.0) else {
            return ListProductsResponse::BadRequest(invalid_user_id());
        };

        let params = ListUserProductsParams {
            user_id: user_id.clone(),
            sort: SortKey::resolve(sort.0.as_deref()),
            last: last.0,
            size: size.0,
        };

        match self.list_by_user_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(ProductPageResponse::from_page(
                page,
                Some(&user_id),
            ))),
            Err(err) => err.into(),
        }
    }

    /// List a user's wished products
    ///
    /// Newest listing first; the cursor is a product id.
    #[oai(
        path = "/users/:user_id/products_wish",
        method = "get",
        tag = "ApiTags::Wishes"
    )]
    async fn list_wished_products(
        &self,
        user_id: Path<String>,
        /// Page size (default: 10)
        size: Query<Option<i64>>,
        /// Cursor from the previous page
        last: Query<Option<String>>,
    ) -> ListProductsResponse {
        let Some(user_id) = UserId::parse(&user_id.0) else {
            return ListProductsResponse::BadRequest(invalid_user_id());
        };

        let params = ListWishedProductsParams {
            user_id: user_id.clone(),
            last: last.0,
            size: size.0,
        };

        match self.list_wished_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(ProductPageResponse::from_page(
                page,
                Some(&user_id),
            ))),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum InsertProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ProductError> for ListProductsResponse {
    fn from(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => ListProductsResponse::BadRequest(json),
            _ => ListProductsResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
