//! `StoreRepository` implementation shared by the SQL adapters.
//!
//! The statements are identical for MySQL and SQLite; only the pool type and
//! the way a generated key is read back differ. Each adapter provides a `pool`
//! field and a `last_insert_id(&QueryResult) -> i64` associated function, then
//! invokes [`impl_store_repository!`].

macro_rules! impl_store_repository {
    ($repo:ty) => {
        #[async_trait::async_trait]
        impl shop_types::StoreRepository for $repo {
            // ─────────────────────────────────────────────────────────────────
            // Users
            // ─────────────────────────────────────────────────────────────────

            async fn create_user(
                &self,
                user: shop_types::NewUser,
            ) -> Result<i64, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::INSERT_USER)
                    .bind(user.name)
                    .bind(user.surname)
                    .bind(user.phone)
                    .bind(user.email)
                    .bind(user.state)
                    .bind(user.country)
                    .bind(user.postcode)
                    .bind(user.address)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(Self::last_insert_id(&result))
            }

            async fn get_user(
                &self,
                user_pk: i64,
            ) -> Result<Option<shop_types::User>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_USER)
                    .bind(user_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn find_user_by_email(
                &self,
                email: &str,
            ) -> Result<Option<shop_types::User>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::FIND_USER_BY_EMAIL)
                    .bind(email)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            // ─────────────────────────────────────────────────────────────────
            // Catalog
            // ─────────────────────────────────────────────────────────────────

            async fn get_item(
                &self,
                item_pk: i64,
            ) -> Result<Option<shop_types::Item>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_ITEM)
                    .bind(item_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_items(&self) -> Result<Vec<shop_types::Item>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_ITEMS)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_items_in_collection(
                &self,
                collection_pk: i64,
            ) -> Result<Vec<shop_types::Item>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_ITEMS_IN_COLLECTION)
                    .bind(collection_pk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn get_variant(
                &self,
                variant_pk: i64,
            ) -> Result<Option<shop_types::Variant>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_VARIANT)
                    .bind(variant_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_variants(
                &self,
                item_pk: i64,
            ) -> Result<Vec<shop_types::Variant>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_VARIANTS)
                    .bind(item_pk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_variant_images(
                &self,
                variant_pk: i64,
            ) -> Result<Vec<shop_types::Image>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_VARIANT_IMAGES)
                    .bind(variant_pk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn get_collection(
                &self,
                collection_pk: i64,
            ) -> Result<Option<shop_types::Collection>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_COLLECTION)
                    .bind(collection_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_collections(
                &self,
            ) -> Result<Vec<shop_types::Collection>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_COLLECTIONS)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            // ─────────────────────────────────────────────────────────────────
            // Content
            // ─────────────────────────────────────────────────────────────────

            async fn get_article(
                &self,
                article_pk: i64,
            ) -> Result<Option<shop_types::Article>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_ARTICLE)
                    .bind(article_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_articles_for_topic(
                &self,
                topic_pk: i64,
            ) -> Result<Vec<shop_types::Article>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_ARTICLES_FOR_TOPIC)
                    .bind(topic_pk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_topics(&self) -> Result<Vec<shop_types::Topic>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_TOPICS)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            // ─────────────────────────────────────────────────────────────────
            // Discounts & reviews
            // ─────────────────────────────────────────────────────────────────

            async fn find_discount(
                &self,
                code: &str,
            ) -> Result<Option<shop_types::Discount>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::FIND_DISCOUNT)
                    .bind(code)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn list_reviews_for_item(
                &self,
                item_pk: i64,
            ) -> Result<Vec<shop_types::Review>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_REVIEWS_FOR_ITEM)
                    .bind(item_pk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn find_review(
                &self,
                email: &str,
                item_fk: i64,
            ) -> Result<Option<shop_types::Review>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::FIND_REVIEW)
                    .bind(email)
                    .bind(item_fk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn create_review(
                &self,
                review: shop_types::NewReview,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let mut db_tx = self
                    .pool
                    .begin()
                    .await
                    .map_err(|e| shop_types::RepoError::Transaction(e.to_string()))?;

                let result = sqlx::query($crate::queries::INSERT_REVIEW)
                    .bind(&review.email)
                    .bind(review.rating)
                    .bind(&review.description)
                    .bind(review.date)
                    .bind(&review.name)
                    .bind(review.item_fk)
                    .execute(&mut *db_tx)
                    .await
                    .map_err($crate::db_error)?;

                let rating_pk = Self::last_insert_id(&result);

                sqlx::query($crate::queries::LINK_REVIEW_TO_ITEM)
                    .bind(review.item_fk)
                    .bind(rating_pk)
                    .execute(&mut *db_tx)
                    .await
                    .map_err($crate::db_error)?;

                db_tx
                    .commit()
                    .await
                    .map_err(|e| shop_types::RepoError::Transaction(e.to_string()))?;

                Ok(shop_types::WriteResult::inserted(
                    result.rows_affected(),
                    rating_pk,
                ))
            }

            // ─────────────────────────────────────────────────────────────────
            // Carts
            // ─────────────────────────────────────────────────────────────────

            async fn create_cart(&self) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::INSERT_CART)
                    .bind(chrono::Utc::now().naive_utc())
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::inserted(
                    result.rows_affected(),
                    Self::last_insert_id(&result),
                ))
            }

            async fn get_cart(
                &self,
                cart_pk: i64,
            ) -> Result<Option<shop_types::Cart>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_CART)
                    .bind(cart_pk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn get_cart_for_user(
                &self,
                user_fk: i64,
            ) -> Result<Option<shop_types::Cart>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::GET_CART_FOR_USER)
                    .bind(user_fk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn assign_cart_user(
                &self,
                cart_pk: i64,
                user_fk: i64,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::ASSIGN_CART_USER)
                    .bind(user_fk)
                    .bind(cart_pk)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::changed(result.rows_affected()))
            }

            async fn find_cart_line(
                &self,
                cart_fk: i64,
                item_fk: i64,
            ) -> Result<Option<shop_types::CartLine>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::FIND_CART_LINE)
                    .bind(cart_fk)
                    .bind(item_fk)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn add_cart_line(
                &self,
                line: shop_types::NewCartLine,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::INSERT_CART_LINE)
                    .bind(line.cart_fk)
                    .bind(line.item_fk)
                    .bind(line.variant_fk)
                    .bind(line.amount)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::inserted(
                    result.rows_affected(),
                    Self::last_insert_id(&result),
                ))
            }

            async fn remove_cart_line(
                &self,
                line_pk: i64,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::DELETE_CART_LINE)
                    .bind(line_pk)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::changed(result.rows_affected()))
            }

            async fn list_cart_lines(
                &self,
                cart_fk: i64,
            ) -> Result<Vec<shop_types::CartLineDetail>, shop_types::RepoError> {
                sqlx::query_as($crate::queries::LIST_CART_LINES)
                    .bind(cart_fk)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::db_error)
            }

            async fn set_cart_line_variant(
                &self,
                line_pk: i64,
                variant_fk: i64,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::SET_CART_LINE_VARIANT)
                    .bind(variant_fk)
                    .bind(line_pk)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::changed(result.rows_affected()))
            }

            async fn set_cart_line_amount(
                &self,
                line_pk: i64,
                amount: i64,
            ) -> Result<shop_types::WriteResult, shop_types::RepoError> {
                let result = sqlx::query($crate::queries::SET_CART_LINE_AMOUNT)
                    .bind(amount)
                    .bind(line_pk)
                    .execute(&self.pool)
                    .await
                    .map_err($crate::db_error)?;

                Ok(shop_types::WriteResult::changed(result.rows_affected()))
            }
        }
    };
}

pub(crate) use impl_store_repository;
