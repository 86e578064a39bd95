//! ShopService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use shop_types::{
        AddCartItemRequest, AddReviewRequest, AddUserRequest, AppError, Article, Cart, CartLine,
        CartLineDetail, CheckoutOrder, CheckoutRequest, CheckoutSession, Collection, Discount,
        DiscountCodeRequest, GetUserRequest, IdRequest, Image, Item, NewCartLine, NewReview,
        NewUser, PaymentError, PaymentGateway, RepoError, Review, StoreRepository, Topic,
        UpdateCartAmountRequest, User, Variant, WriteResult,
    };

    use crate::ShopService;

    #[derive(Default)]
    struct State {
        users: Vec<User>,
        items: Vec<Item>,
        discounts: Vec<Discount>,
        reviews: Vec<Review>,
        carts: Vec<Cart>,
        lines: Vec<CartLine>,
    }

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        state: Mutex<State>,
        /// When set, every call fails with this database error.
        failure: Option<String>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                state: Mutex::new(State::default()),
                failure: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            match &self.failure {
                Some(msg) => Err(RepoError::Database(msg.clone())),
                None => Ok(()),
            }
        }

        fn with_user(self, email: &str, sale: bool) -> Self {
            {
                let mut state = self.state.lock().unwrap();
                let user_pk = state.users.len() as i64 + 1;
                state.users.push(User {
                    user_pk,
                    name: Some("Jane".into()),
                    surname: None,
                    phone: None,
                    email: Some(email.to_string()),
                    state: None,
                    country: None,
                    postcode: None,
                    address: None,
                    sale,
                });
            }
            self
        }

        fn with_discount(self, code: &str, is_active: bool) -> Self {
            {
                let mut state = self.state.lock().unwrap();
                let discount_pk = state.discounts.len() as i64 + 1;
                state.discounts.push(Discount {
                    discount_pk,
                    code: code.to_string(),
                    percent: 10.0,
                    is_active,
                });
            }
            self
        }

        fn review_count(&self) -> usize {
            self.state.lock().unwrap().reviews.len()
        }

        fn line_count(&self) -> usize {
            self.state.lock().unwrap().lines.len()
        }
    }

    #[async_trait]
    impl StoreRepository for MockRepo {
        async fn create_user(&self, user: NewUser) -> Result<i64, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let user_pk = state.users.len() as i64 + 1;
            state.users.push(User {
                user_pk,
                name: user.name,
                surname: user.surname,
                phone: user.phone,
                email: user.email,
                state: user.state,
                country: user.country,
                postcode: user.postcode,
                address: user.address,
                sale: false,
            });
            Ok(user_pk)
        }

        async fn get_user(&self, user_pk: i64) -> Result<Option<User>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.users.iter().find(|u| u.user_pk == user_pk).cloned())
        }

        async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned())
        }

        async fn get_item(&self, item_pk: i64) -> Result<Option<Item>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.items.iter().find(|i| i.item_pk == item_pk).cloned())
        }

        async fn list_items(&self) -> Result<Vec<Item>, RepoError> {
            self.check()?;
            Ok(self.state.lock().unwrap().items.clone())
        }

        async fn list_items_in_collection(&self, _collection_pk: i64) -> Result<Vec<Item>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn get_variant(&self, _variant_pk: i64) -> Result<Option<Variant>, RepoError> {
            self.check()?;
            Ok(None)
        }

        async fn list_variants(&self, _item_pk: i64) -> Result<Vec<Variant>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn list_variant_images(&self, _variant_pk: i64) -> Result<Vec<Image>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn get_collection(&self, _collection_pk: i64) -> Result<Option<Collection>, RepoError> {
            self.check()?;
            Ok(None)
        }

        async fn list_collections(&self) -> Result<Vec<Collection>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn get_article(&self, _article_pk: i64) -> Result<Option<Article>, RepoError> {
            self.check()?;
            Ok(None)
        }

        async fn list_articles_for_topic(&self, _topic_pk: i64) -> Result<Vec<Article>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn list_topics(&self) -> Result<Vec<Topic>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn find_discount(&self, code: &str) -> Result<Option<Discount>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.discounts.iter().find(|d| d.code == code).cloned())
        }

        async fn list_reviews_for_item(&self, item_pk: i64) -> Result<Vec<Review>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state
                .reviews
                .iter()
                .filter(|r| r.item_fk == item_pk)
                .cloned()
                .collect())
        }

        async fn find_review(&self, email: &str, item_fk: i64) -> Result<Option<Review>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state
                .reviews
                .iter()
                .find(|r| r.email == email && r.item_fk == item_fk)
                .cloned())
        }

        async fn create_review(&self, review: NewReview) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let rating_pk = state.reviews.len() as i64 + 1;
            state.reviews.push(Review {
                rating_pk,
                email: review.email,
                rating: review.rating,
                description: review.description,
                date: review.date,
                name: review.name,
                item_fk: review.item_fk,
            });
            Ok(WriteResult::inserted(1, rating_pk))
        }

        async fn create_cart(&self) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let cart_pk = state.carts.len() as i64 + 1;
            state.carts.push(Cart {
                cart_pk,
                user_fk: None,
                created: Utc::now().naive_utc(),
            });
            Ok(WriteResult::inserted(1, cart_pk))
        }

        async fn get_cart(&self, cart_pk: i64) -> Result<Option<Cart>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.carts.iter().find(|c| c.cart_pk == cart_pk).cloned())
        }

        async fn get_cart_for_user(&self, user_fk: i64) -> Result<Option<Cart>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state
                .carts
                .iter()
                .find(|c| c.user_fk == Some(user_fk))
                .cloned())
        }

        async fn assign_cart_user(
            &self,
            cart_pk: i64,
            user_fk: i64,
        ) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let mut affected = 0;
            for cart in state.carts.iter_mut().filter(|c| c.cart_pk == cart_pk) {
                cart.user_fk = Some(user_fk);
                affected += 1;
            }
            Ok(WriteResult::changed(affected))
        }

        async fn find_cart_line(
            &self,
            cart_fk: i64,
            item_fk: i64,
        ) -> Result<Option<CartLine>, RepoError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state
                .lines
                .iter()
                .find(|l| l.cart_fk == cart_fk && l.item_fk == item_fk)
                .cloned())
        }

        async fn add_cart_line(&self, line: NewCartLine) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let pk = state.lines.len() as i64 + 1;
            state.lines.push(CartLine {
                pk,
                cart_fk: line.cart_fk,
                item_fk: line.item_fk,
                variant_fk: Some(line.variant_fk),
                amount: line.amount,
            });
            Ok(WriteResult::inserted(1, pk))
        }

        async fn remove_cart_line(&self, line_pk: i64) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let before = state.lines.len();
            state.lines.retain(|l| l.pk != line_pk);
            Ok(WriteResult::changed((before - state.lines.len()) as u64))
        }

        async fn list_cart_lines(&self, _cart_fk: i64) -> Result<Vec<CartLineDetail>, RepoError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn set_cart_line_variant(
            &self,
            line_pk: i64,
            variant_fk: i64,
        ) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let mut affected = 0;
            for line in state.lines.iter_mut().filter(|l| l.pk == line_pk) {
                line.variant_fk = Some(variant_fk);
                affected += 1;
            }
            Ok(WriteResult::changed(affected))
        }

        async fn set_cart_line_amount(
            &self,
            line_pk: i64,
            amount: i64,
        ) -> Result<WriteResult, RepoError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            let mut affected = 0;
            for line in state.lines.iter_mut().filter(|l| l.pk == line_pk) {
                line.amount = amount;
                affected += 1;
            }
            Ok(WriteResult::changed(affected))
        }
    }

    /// Payment double that records the orders it was asked to charge.
    pub struct MockGateway {
        orders: Mutex<Vec<CheckoutOrder>>,
        reject_with: Option<String>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                reject_with: Some(message.to_string()),
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_checkout_session(
            &self,
            order: &CheckoutOrder,
        ) -> Result<CheckoutSession, PaymentError> {
            if let Some(message) = &self.reject_with {
                return Err(PaymentError::Rejected {
                    status: 400,
                    message: message.clone(),
                });
            }
            self.orders.lock().unwrap().push(order.clone());
            Ok(CheckoutSession {
                id: format!("cs_test_{}", order.order_id),
                url: format!("https://checkout.example/{}", order.order_id),
            })
        }
    }

    fn service(repo: MockRepo) -> ShopService<MockRepo, MockGateway> {
        ShopService::new(repo, MockGateway::new())
    }

    fn review_request(email: &str) -> AddReviewRequest {
        AddReviewRequest {
            name: Some("Jane".into()),
            email: Some(email.into()),
            rating: Some(5),
            des: Some("Lovely".into()),
            item_fk: Some(3),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Users & discounts
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_add_user_then_get() {
        let svc = service(MockRepo::new());

        let created = svc
            .add_user(AddUserRequest {
                email: Some("jane@example.com".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.status, "ok");

        let user = svc
            .get_user(GetUserRequest {
                user_id: Some(created.inserted_id),
            })
            .await
            .unwrap();
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_get_user_validation_and_not_found() {
        let svc = service(MockRepo::new());

        let err = svc.get_user(GetUserRequest::default()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Missing userId"));

        let err = svc
            .get_user(GetUserRequest { user_id: Some(9) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "User not found"));
    }

    #[tokio::test]
    async fn test_check_discount() {
        let repo = MockRepo::new()
            .with_discount("SUMMER10", true)
            .with_discount("WINTER", false);
        let svc = service(repo);

        let ok = svc
            .check_discount(DiscountCodeRequest {
                code: Some("SUMMER10".into()),
            })
            .await
            .unwrap();
        assert_eq!(ok.code, "SUMMER10");

        let err = svc
            .check_discount(DiscountCodeRequest {
                code: Some("WINTER".into()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Code is not active at this time");

        let err = svc
            .check_discount(DiscountCodeRequest {
                code: Some("NOPE".into()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Code not found");

        let err = svc
            .check_discount(DiscountCodeRequest {
                code: Some(String::new()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reviews
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_add_review_validates_fields_in_order() {
        let svc = service(MockRepo::new());

        let cases = [
            (AddReviewRequest { name: None, ..review_request("a@b.c") }, "Missing name"),
            (AddReviewRequest { email: None, ..review_request("a@b.c") }, "Missing email"),
            (AddReviewRequest { rating: Some(0), ..review_request("a@b.c") }, "Missing rating"),
            (AddReviewRequest { des: Some(String::new()), ..review_request("a@b.c") }, "Missing description"),
            (AddReviewRequest { item_fk: None, ..review_request("a@b.c") }, "Missing item_fk"),
        ];

        for (req, expected) in cases {
            let err = svc.add_review(req).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
            assert_eq!(err.message(), expected);
        }

        // Every field missing reports the first one.
        let err = svc.add_review(AddReviewRequest::default()).await.unwrap_err();
        assert_eq!(err.message(), "Missing name");
    }

    #[tokio::test]
    async fn test_add_review_rejects_out_of_range_rating() {
        let svc = service(MockRepo::new().with_user("jane@example.com", true));

        let err = svc
            .add_review(AddReviewRequest {
                rating: Some(6),
                ..review_request("jane@example.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_add_review_requires_known_email() {
        let svc = service(MockRepo::new());

        let err = svc
            .add_review(review_request("stranger@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(
            err.message(),
            "Please use the email you purchased the product with."
        );
    }

    #[tokio::test]
    async fn test_add_review_requires_purchase() {
        let svc = service(MockRepo::new().with_user("jane@example.com", false));

        let err = svc
            .add_review(review_request("jane@example.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "You need to purchase the product before adding a review."
        );
        assert_eq!(svc.repo().review_count(), 0);
    }

    #[tokio::test]
    async fn test_add_review_once_per_item() {
        let svc = service(MockRepo::new().with_user("jane@example.com", true));

        let first = svc.add_review(review_request("jane@example.com")).await.unwrap();
        assert_eq!(first.affected_rows, 1);
        assert_eq!(first.insert_id, Some(1));

        let err = svc
            .add_review(review_request("jane@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            err.message(),
            "You have already submitted a review for this item"
        );
        assert_eq!(svc.repo().review_count(), 1);

        let reviews = svc.list_reviews(IdRequest { id: Some(3) }).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].description, "Lovely");
    }

    #[tokio::test]
    async fn test_list_reviews_empty_is_not_found() {
        let svc = service(MockRepo::new());

        let err = svc.list_reviews(IdRequest { id: Some(3) }).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = svc.list_reviews(IdRequest { id: None }).await.unwrap_err();
        assert_eq!(err.message(), "Missing item id");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog & content
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_empty_listings() {
        let svc = service(MockRepo::new());

        assert!(matches!(svc.list_items().await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.list_topics().await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.list_collections().await, Err(AppError::NotFound(_))));

        // Variants, variant images and cart lines may legitimately be empty.
        assert!(svc.list_variants(IdRequest { id: Some(1) }).await.unwrap().is_empty());
        assert!(
            svc.list_variant_images(IdRequest { id: Some(1) })
                .await
                .unwrap()
                .is_empty()
        );
        assert!(svc.list_cart_items(IdRequest { id: Some(1) }).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let svc = service(MockRepo::new());

        let err = svc.get_item(IdRequest { id: Some(1) }).await.unwrap_err();
        assert_eq!(err.message(), "Item not found");
        let err = svc.get_variant(IdRequest { id: Some(1) }).await.unwrap_err();
        assert_eq!(err.message(), "Variant not found");
        let err = svc.get_article(IdRequest { id: Some(1) }).await.unwrap_err();
        assert_eq!(err.message(), "Article not found");
        let err = svc.get_collection(IdRequest { id: Some(1) }).await.unwrap_err();
        assert_eq!(err.message(), "Collection not found");
    }

    #[tokio::test]
    async fn test_repository_failure_surfaces_raw_message() {
        let svc = service(MockRepo::failing("Table 'store.items' doesn't exist"));

        let err = svc.list_items().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.message(), "Table 'store.items' doesn't exist");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Carts
    // ─────────────────────────────────────────────────────────────────────────────

    fn cart_item(cart: i64, item: i64) -> AddCartItemRequest {
        AddCartItemRequest {
            id: Some(cart),
            item_fk: Some(item),
            quantity: Some(2),
            variant: Some(7),
        }
    }

    #[tokio::test]
    async fn test_add_cart_item_rejects_duplicates() {
        let svc = service(MockRepo::new());
        let cart_pk = svc.create_cart().await.unwrap().insert_id.unwrap();

        let added = svc.add_cart_item(cart_item(cart_pk, 4)).await.unwrap();
        assert_eq!(added.affected_rows, 1);

        let err = svc.add_cart_item(cart_item(cart_pk, 4)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.message(), "Item already in cart");
        assert_eq!(svc.repo().line_count(), 1);

        // Same item in another cart is fine.
        svc.add_cart_item(cart_item(cart_pk + 1, 4)).await.unwrap();
        assert_eq!(svc.repo().line_count(), 2);
    }

    #[tokio::test]
    async fn test_add_cart_item_validation() {
        let svc = service(MockRepo::new());

        let cases = [
            (AddCartItemRequest { id: None, ..cart_item(1, 1) }, "Missing id"),
            (AddCartItemRequest { item_fk: None, ..cart_item(1, 1) }, "Missing item fk"),
            (AddCartItemRequest { quantity: Some(0), ..cart_item(1, 1) }, "Missing quantity"),
            (AddCartItemRequest { variant: None, ..cart_item(1, 1) }, "Missing variant"),
            (AddCartItemRequest { quantity: Some(-3), ..cart_item(1, 1) }, "Quantity must be positive"),
        ];

        for (req, expected) in cases {
            let err = svc.add_cart_item(req).await.unwrap_err();
            assert_eq!(err.message(), expected);
        }
        assert_eq!(svc.repo().line_count(), 0);
    }

    #[tokio::test]
    async fn test_cart_ownership_and_amounts() {
        let svc = service(MockRepo::new());
        let cart_pk = svc.create_cart().await.unwrap().insert_id.unwrap();

        let err = svc
            .get_cart_for_user(IdRequest { id: Some(5) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        svc.assign_cart_user(shop_types::AssignCartUserRequest {
            id: Some(cart_pk),
            user_fk: Some(5),
        })
        .await
        .unwrap();
        let cart = svc.get_cart_for_user(IdRequest { id: Some(5) }).await.unwrap();
        assert_eq!(cart.cart_pk, cart_pk);

        let line_pk = svc
            .add_cart_item(cart_item(cart_pk, 4))
            .await
            .unwrap()
            .insert_id
            .unwrap();
        let updated = svc
            .update_cart_amount(UpdateCartAmountRequest {
                id: Some(line_pk),
                amount: Some(3),
            })
            .await
            .unwrap();
        assert_eq!(updated.affected_rows, 1);

        let err = svc
            .update_cart_amount(UpdateCartAmountRequest {
                id: Some(line_pk),
                amount: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Missing amount");

        let err = svc
            .update_cart_amount(UpdateCartAmountRequest {
                id: Some(line_pk),
                amount: Some(-2),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.message(), "Amount must be positive");

        let removed = svc.remove_cart_item(IdRequest { id: Some(line_pk) }).await.unwrap();
        assert_eq!(removed.affected_rows, 1);
        assert_eq!(svc.repo().line_count(), 0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Checkout
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_checkout_converts_price_to_cents() {
        let svc = service(MockRepo::new());

        let session = svc
            .create_checkout_session(CheckoutRequest {
                price: Some(19.99),
                order_id: Some("1042".into()),
            })
            .await
            .unwrap();
        assert_eq!(session.url, "https://checkout.example/1042");

        let orders = svc.payments().orders.lock().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].amount_minor, 1999);
        assert_eq!(orders[0].product_name(), "Order 1042");
    }

    #[tokio::test]
    async fn test_checkout_validation() {
        let svc = service(MockRepo::new());

        let missing = [
            CheckoutRequest { price: None, order_id: Some("1".into()) },
            CheckoutRequest { price: Some(10.0), order_id: None },
            CheckoutRequest { price: Some(0.0), order_id: Some("1".into()) },
        ];
        for req in missing {
            let err = svc.create_checkout_session(req).await.unwrap_err();
            assert_eq!(err.message(), "Missing price or orderId");
        }

        for price in [-5.0, f64::INFINITY, f64::NEG_INFINITY, 0.004] {
            let err = svc
                .create_checkout_session(CheckoutRequest {
                    price: Some(price),
                    order_id: Some("1".into()),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
            assert_eq!(err.message(), "Price must be a positive amount");
        }

        // Half a cent rounds up to one minor unit and is accepted.
        let session = svc
            .create_checkout_session(CheckoutRequest {
                price: Some(0.005),
                order_id: Some("2".into()),
            })
            .await
            .unwrap();
        assert!(!session.url.is_empty());
        assert_eq!(svc.payments().orders.lock().unwrap()[0].amount_minor, 1);
        svc.payments().orders.lock().unwrap().clear();

        assert!(svc.payments().orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_processor_rejection() {
        let svc = ShopService::new(MockRepo::new(), MockGateway::rejecting("Invalid API Key provided"));

        let err = svc
            .create_checkout_session(CheckoutRequest {
                price: Some(5.0),
                order_id: Some("1".into()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Payment(_)));
        assert_eq!(err.message(), "Invalid API Key provided");
    }
}
