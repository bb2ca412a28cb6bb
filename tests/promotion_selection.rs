//! Promotion selection scenarios.
//!
//! Menu: 101 Kung Pao Chicken (20), 102 Mapo Tofu (15).

use best_charge::prelude::*;
use rusty_money::{Money, iso::CNY};
use testresult::TestResult;

fn menu<'a>() -> Result<Menu<'a>, MenuError> {
    Menu::with_items(
        [
            MenuItem::new("101", "Kung Pao Chicken", Money::from_minor(2000, CNY)),
            MenuItem::new("102", "Mapo Tofu", Money::from_minor(1500, CNY)),
        ],
        CNY,
    )
}

fn half_price(items: &[&str]) -> Promotion<'static> {
    Promotion::HalfPriceOnItems(HalfPricePromotion::new(items.iter().copied()))
}

fn threshold(threshold: i64, discount: i64) -> Promotion<'static> {
    Promotion::DiscountOverThreshold(ThresholdDiscountPromotion::new(
        Money::from_minor(threshold * 100, CNY),
        Money::from_minor(discount * 100, CNY),
    ))
}

#[test]
fn half_price_on_single_item() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 2"])?;

    let result = evaluate(&cart, &menu, &[half_price(&["101"])])?;

    assert_eq!(result.total, Money::from_minor(2000, CNY));

    let applied = result.applied_promotion.ok_or("promotion should apply")?;

    assert_eq!(applied.economization, Money::from_minor(2000, CNY));
    assert_eq!(applied.discounted_item_names.as_slice(), ["Kung Pao Chicken"]);

    Ok(())
}

#[test]
fn threshold_reached() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 1", "102 x 1"])?;

    let result = evaluate(&cart, &menu, &[threshold(30, 6)])?;

    assert_eq!(result.total, Money::from_minor(2900, CNY));
    assert_eq!(
        result.applied_promotion.map(|applied| applied.economization),
        Some(Money::from_minor(600, CNY))
    );

    Ok(())
}

#[test]
fn threshold_not_reached_renders_no_promotion() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 1", "102 x 1"])?;

    let result = evaluate(&cart, &menu, &[threshold(40, 6)])?;

    assert_eq!(result.total, Money::from_minor(3500, CNY));
    assert!(result.applied_promotion.is_none());
    assert!(!render(&result).contains("使用优惠"));

    Ok(())
}

#[test]
fn cheapest_wins_regardless_of_order() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 1", "102 x 1"])?;

    // 满30减6元 gives 29, 满30减3元 gives 32
    let cheap = threshold(30, 6);
    let dear = threshold(30, 3);

    for promotions in [[cheap.clone(), dear.clone()], [dear, cheap]] {
        let result = evaluate(&cart, &menu, &promotions)?;

        assert_eq!(result.total, Money::from_minor(2900, CNY));
    }

    Ok(())
}

#[test]
fn tie_keeps_first_promotion() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 1", "102 x 1"])?;

    // Both come to 25: half price on 101 gives 10 + 15, 满30减10元 gives 35 - 10
    let result = evaluate(&cart, &menu, &[half_price(&["101"]), threshold(30, 10)])?;

    assert_eq!(result.total, Money::from_minor(2500, CNY));
    assert_eq!(
        result.applied_promotion.map(|applied| applied.kind),
        Some(PromotionKind::HalfPriceOnItems)
    );

    let result = evaluate(&cart, &menu, &[threshold(30, 10), half_price(&["101"])])?;

    assert_eq!(
        result.applied_promotion.map(|applied| applied.kind),
        Some(PromotionKind::DiscountOverThreshold)
    );

    Ok(())
}

#[test]
fn total_never_exceeds_subtotal() -> TestResult {
    let menu = menu()?;
    let promotions = [
        half_price(&["102"]),
        threshold(30, 6),
        threshold(100, 50),
        half_price(&[]),
    ];

    let carts: [&[&str]; 5] = [
        &[],
        &["101 x 1"],
        &["102 x 3"],
        &["101 x 1", "102 x 1"],
        &["101 x 7", "102 x 2", "101 x 1"],
    ];

    for lines in carts {
        let cart = parse_cart(lines.iter().copied())?;
        let baseline = PricingResult::undiscounted(&cart, &menu)?;
        let result = evaluate(&cart, &menu, &promotions)?;

        assert!(
            result.total.lte(&baseline.total)?,
            "total {} exceeds subtotal {} for {lines:?}",
            result.total,
            baseline.total
        );
        assert_eq!(result.subtotal, baseline.subtotal);
        assert_eq!(result.total.add(result.savings()?)?, result.subtotal);
    }

    Ok(())
}

#[test]
fn parsed_quantity_renders_unchanged() -> TestResult {
    let menu = menu()?;
    let cart = parse_cart(["101 x 2"])?;

    let result = evaluate(&cart, &menu, &[])?;

    assert_eq!(result.line_items.first().map(|line| line.quantity), Some(2));
    assert!(render(&result).contains("Kung Pao Chicken x 2 = 40元\n"));

    Ok(())
}
