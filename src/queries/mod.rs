pub mod analytics_queries;
pub mod product_queries;
pub mod relation_queries;
