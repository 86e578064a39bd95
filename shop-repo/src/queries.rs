//! SQL shared by the MySQL and SQLite adapters.
//!
//! Both backends use `?` placeholders, so one statement serves both.

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

pub const INSERT_USER: &str = r#"INSERT INTO user (name, surname, phone, email, state, country, postcode, address)
   VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#;

pub const GET_USER: &str = r#"SELECT user_pk, name, surname, phone, email, state, country, postcode, address, sale
   FROM user WHERE user_pk = ?"#;

pub const FIND_USER_BY_EMAIL: &str = r#"SELECT user_pk, name, surname, phone, email, state, country, postcode, address, sale
   FROM user WHERE email = ? ORDER BY user_pk LIMIT 1"#;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

pub const GET_ITEM: &str =
    r#"SELECT item_pk, name, description, price, image_url FROM items WHERE item_pk = ?"#;

pub const LIST_ITEMS: &str =
    r#"SELECT item_pk, name, description, price, image_url FROM items ORDER BY item_pk"#;

pub const LIST_ITEMS_IN_COLLECTION: &str = r#"SELECT i.item_pk, i.name, i.description, i.price, i.image_url
   FROM items i
   INNER JOIN item_to_collection ic ON i.item_pk = ic.item_fk
   WHERE ic.collection_fk = ?
   ORDER BY i.item_pk"#;

pub const GET_VARIANT: &str =
    r#"SELECT variant_pk, item_fk, name, price, stock FROM variants WHERE variant_pk = ?"#;

pub const LIST_VARIANTS: &str = r#"SELECT variant_pk, item_fk, name, price, stock
   FROM variants WHERE item_fk = ? ORDER BY variant_pk"#;

pub const LIST_VARIANT_IMAGES: &str = r#"SELECT i.image_pk, i.url, i.alt
   FROM images i
   JOIN image_to_variant itv ON i.image_pk = itv.image_fk
   WHERE itv.variant_fk = ?
   ORDER BY i.image_pk"#;

pub const GET_COLLECTION: &str = r#"SELECT collection_pk, name, description, image_url
   FROM collections WHERE collection_pk = ?"#;

pub const LIST_COLLECTIONS: &str = r#"SELECT collection_pk, name, description, image_url
   FROM collections ORDER BY collection_pk"#;

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

pub const GET_ARTICLE: &str = r#"SELECT article_pk, title, body, author, published
   FROM articles WHERE article_pk = ?"#;

pub const LIST_ARTICLES_FOR_TOPIC: &str = r#"SELECT a.article_pk, a.title, a.body, a.author, a.published
   FROM articles a
   JOIN article_to_topic att ON a.article_pk = att.article_fk
   WHERE att.topic_fk = ?
   ORDER BY a.article_pk"#;

pub const LIST_TOPICS: &str = r#"SELECT topic_pk, name FROM topics ORDER BY topic_pk"#;

// ─────────────────────────────────────────────────────────────────────────────
// Discounts & reviews
// ─────────────────────────────────────────────────────────────────────────────

pub const FIND_DISCOUNT: &str =
    r#"SELECT discount_pk, code, percent, is_active FROM discounts WHERE code = ?"#;

pub const LIST_REVIEWS_FOR_ITEM: &str = r#"SELECT r.rating_pk, r.email, r.rating, r.description, r.date, r.name, r.item_fk
   FROM rating AS r
   JOIN rating_to_item AS ri ON r.rating_pk = ri.rating_fk
   WHERE ri.item_fk = ?
   ORDER BY r.rating_pk"#;

pub const FIND_REVIEW: &str = r#"SELECT rating_pk, email, rating, description, date, name, item_fk
   FROM rating WHERE email = ? AND item_fk = ? LIMIT 1"#;

pub const INSERT_REVIEW: &str = r#"INSERT INTO rating (email, rating, description, date, name, item_fk)
   VALUES (?, ?, ?, ?, ?, ?)"#;

pub const LINK_REVIEW_TO_ITEM: &str =
    r#"INSERT INTO rating_to_item (item_fk, rating_fk) VALUES (?, ?)"#;

// ─────────────────────────────────────────────────────────────────────────────
// Carts
// ─────────────────────────────────────────────────────────────────────────────

pub const INSERT_CART: &str = r#"INSERT INTO cart (created) VALUES (?)"#;

pub const GET_CART: &str = r#"SELECT cart_pk, user_fk, created FROM cart WHERE cart_pk = ?"#;

pub const GET_CART_FOR_USER: &str =
    r#"SELECT cart_pk, user_fk, created FROM cart WHERE user_fk = ? ORDER BY cart_pk LIMIT 1"#;

pub const ASSIGN_CART_USER: &str = r#"UPDATE cart SET user_fk = ? WHERE cart_pk = ?"#;

pub const FIND_CART_LINE: &str = r#"SELECT pk, cart_fk, item_fk, variant_fk, amount
   FROM items_to_cart WHERE cart_fk = ? AND item_fk = ? LIMIT 1"#;

pub const INSERT_CART_LINE: &str = r#"INSERT INTO items_to_cart (cart_fk, item_fk, variant_fk, amount)
   VALUES (?, ?, ?, ?)"#;

pub const DELETE_CART_LINE: &str = r#"DELETE FROM items_to_cart WHERE pk = ?"#;

pub const LIST_CART_LINES: &str = r#"SELECT itc.pk, itc.cart_fk, itc.item_fk, itc.variant_fk, itc.amount,
          i.name AS item_name, i.description AS item_description,
          i.price AS item_price, i.image_url AS item_image_url,
          v.name AS variant_name, v.price AS variant_price, v.stock AS variant_stock
   FROM items_to_cart itc
   LEFT JOIN items i ON itc.item_fk = i.item_pk
   LEFT JOIN variants v ON itc.variant_fk = v.variant_pk
   WHERE itc.cart_fk = ?
   ORDER BY itc.pk"#;

pub const SET_CART_LINE_VARIANT: &str = r#"UPDATE items_to_cart SET variant_fk = ? WHERE pk = ?"#;

pub const SET_CART_LINE_AMOUNT: &str = r#"UPDATE items_to_cart SET amount = ? WHERE pk = ?"#;
