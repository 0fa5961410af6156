//! Schema setup for the `market` table. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_market;
mod m20240101_000002_add_market_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_market::Migration),
            Box::new(m20240101_000002_add_market_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_ordered_table_first() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["m20240101_000001_create_market", "m20240101_000002_add_market_indexes"]
        );
    }
}
