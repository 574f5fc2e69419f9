pub mod affiliate_link;
pub mod blog_post;
pub mod click;
pub mod content_queue_item;
pub mod coupon;
pub mod page;
pub mod review;
pub mod scrape_job;
pub mod subscriber;
pub mod user_review;
pub mod vpn_provider;
