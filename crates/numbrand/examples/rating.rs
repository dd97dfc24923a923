//! Average star rating of a product.
//!
//! Each review carries a 1-5 star rating; the average divides by the
//! number of reviews, which must be non-zero.

use numbrand::prelude::*;

type Rating = Intersect<IntegerNumber, NumberInRange<1, 5>>;

fn parse_rating(raw: f64) -> ValidationResult<Rating> {
    compose((integer(), in_range::<1, 5>())).validate(raw)
}

fn average(ratings: &[Rating]) -> ValidationResult<FiniteNumber> {
    let sum: f64 = ratings.iter().map(|r| r.get()).sum();
    let total = finite().validate(sum)?;
    let len = ratings.len() as f64;
    let count = compose((natural(), non_zero())).validate(len)?;
    Ok(safe_div(total, count))
}

fn main() -> Result<(), NumberError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut ratings = Vec::new();
    for raw in [5.0, 4.0, 4.5, 3.0, 7.0, 4.0] {
        match parse_rating(raw) {
            Ok(rating) => ratings.push(rating),
            Err(error) => tracing::warn!(raw, %error, "rejected review"),
        }
    }

    let avg = average(&ratings)?;
    tracing::info!(
        reviews = ratings.len(),
        average = avg.get(),
        "computed average"
    );

    // no reviews: the count fails the non-zero check
    let empty = average(&[]);
    tracing::info!(?empty, "average of no reviews");
    Ok(())
}
