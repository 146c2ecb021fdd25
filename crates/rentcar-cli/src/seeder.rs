//! Fake car catalogue generation.

use std::time::Instant;

use fake::Fake;
use fake::faker::company::en::CompanyName;
use rentcar_db::CarRepository;
use rentcar_models::NewCar;

pub const SIZES: [&str; 3] = ["SMALL", "MEDIUM", "LARGE"];

pub fn generate_cars(count: usize) -> Vec<NewCar> {
    (0..count)
        .map(|i| {
            let maker: String = CompanyName().fake();
            let size = SIZES[(0..SIZES.len()).fake::<usize>()];

            NewCar {
                name: format!("{} {}", maker, size.to_lowercase()),
                price: (100_000i64..1_000_000).fake::<i64>(),
                size: size.to_string(),
                image: format!("https://picsum.photos/seed/car-{}/600/400", i),
            }
        })
        .collect()
}

/// Inserts `count` generated cars and returns how many were stored.
pub async fn seed_cars(cars: &dyn CarRepository, count: usize) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    println!("🚗 Seeding {} cars...", count);

    let mut inserted = 0;
    for car in generate_cars(count) {
        cars.create(car).await?;
        inserted += 1;
    }

    println!("   ✓ Inserted {} cars in {:?}", inserted, start_time.elapsed());

    Ok(inserted)
}

pub async fn clear_cars(cars: &dyn CarRepository) -> anyhow::Result<u64> {
    let removed = cars.delete_all().await?;
    println!("   ✓ Removed {} cars", removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentcar_db::InMemoryCarRepository;

    #[test]
    fn test_generated_cars_are_valid() {
        let cars = generate_cars(50);

        assert_eq!(cars.len(), 50);
        for car in &cars {
            assert!(!car.name.is_empty());
            assert!((100_000..1_000_000).contains(&car.price));
            assert!(SIZES.contains(&car.size.as_str()));
        }
    }

    #[tokio::test]
    async fn test_seed_then_clear() {
        let repo = InMemoryCarRepository::new();

        assert_eq!(seed_cars(&repo, 5).await.unwrap(), 5);
        assert_eq!(repo.list().await.unwrap().len(), 5);

        assert_eq!(clear_cars(&repo).await.unwrap(), 5);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
