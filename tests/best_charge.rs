//! Integration tests for the built-in restaurant catalog.
//!
//! The menu has 黄焖鸡 (18), 肉夹馍 (6), 凉皮 (8) and 冰锋 (2). Promotions, in catalog
//! order, are `满30减6元` followed by half price on 黄焖鸡 and 凉皮.

use best_charge::{
    BestChargeError, best_charge,
    cart::CartError,
    fixtures::Fixture,
    items::{Menu, MenuItem},
    pricing::PricingError,
    promotions::{Promotion, half_price::HalfPricePromotion},
};
use rusty_money::{Money, iso::CNY};
use testresult::TestResult;

#[test]
fn half_price_beats_threshold_discount() -> TestResult {
    let fixture = Fixture::builtin()?;

    // 38 undiscounted: 满30减6元 gives 32, half price gives 9 + 12 + 4 = 25
    let receipt = best_charge(
        ["ITEM0001 x 1", "ITEM0013 x 2", "ITEM0022 x 1"],
        fixture.menu()?,
        fixture.promotions(),
    )?;

    let expected = "============= 订餐明细 =============
黄焖鸡 x 1 = 18元
肉夹馍 x 2 = 12元
凉皮 x 1 = 8元
-----------------------------------
使用优惠:
指定菜品半价(黄焖鸡，凉皮)，省13元
-----------------------------------
总计：25元
===================================";

    assert_eq!(receipt, expected);

    Ok(())
}

#[test]
fn threshold_discount_beats_half_price() -> TestResult {
    let fixture = Fixture::builtin()?;

    // 32 undiscounted: 满30减6元 gives 26, half price gives 24 + 4 = 28
    let receipt = best_charge(
        ["ITEM0013 x 4", "ITEM0022 x 1"],
        fixture.menu()?,
        fixture.promotions(),
    )?;

    let expected = "============= 订餐明细 =============
肉夹馍 x 4 = 24元
凉皮 x 1 = 8元
-----------------------------------
使用优惠:
满30减6元，省6元
-----------------------------------
总计：26元
===================================";

    assert_eq!(receipt, expected);

    Ok(())
}

#[test]
fn no_promotion_applies() -> TestResult {
    let fixture = Fixture::builtin()?;

    let receipt = best_charge(["ITEM0013 x 4"], fixture.menu()?, fixture.promotions())?;

    let expected = "============= 订餐明细 =============
肉夹馍 x 4 = 24元
-----------------------------------
总计：24元
===================================";

    assert_eq!(receipt, expected);

    Ok(())
}

#[test]
fn half_price_on_part_of_the_cart() -> TestResult {
    let fixture = Fixture::builtin()?;

    // 凉皮 halved is 4, 冰锋 stays at 2
    let receipt = best_charge(
        ["ITEM0022 x 1", "ITEM0030 x 1"],
        fixture.menu()?,
        fixture.promotions(),
    )?;

    assert!(receipt.contains("指定菜品半价(凉皮)，省4元"));
    assert!(receipt.contains("总计：6元"));

    Ok(())
}

#[test]
fn malformed_line_is_reported() -> TestResult {
    let fixture = Fixture::builtin()?;

    let result = best_charge(["ITEM0001 x 1", "ITEM0013"], fixture.menu()?, fixture.promotions());

    assert_eq!(
        result,
        Err(BestChargeError::Cart(CartError::MissingSeparator { line: 1 }))
    );

    Ok(())
}

#[test]
fn unknown_item_is_reported() -> TestResult {
    let fixture = Fixture::builtin()?;

    let result = best_charge(["ITEM9999 x 1"], fixture.menu()?, fixture.promotions());

    assert_eq!(
        result,
        Err(BestChargeError::Pricing(PricingError::UnknownItem(
            "ITEM9999".to_string()
        )))
    );

    Ok(())
}

#[test]
fn fixture_files_match_builtin_catalog() -> TestResult {
    let builtin = Fixture::builtin()?;
    let from_disk = Fixture::from_set("default")?;

    let builtin_menu = builtin.menu()?;
    let disk_menu = from_disk.menu()?;

    assert_eq!(disk_menu.len(), builtin_menu.len());

    for item in builtin_menu.iter() {
        assert_eq!(disk_menu.get(item.id()), Some(item));
    }

    let builtin_labels: Vec<String> = builtin.promotions().iter().map(Promotion::label).collect();
    let disk_labels: Vec<String> = from_disk.promotions().iter().map(Promotion::label).collect();

    assert_eq!(disk_labels, builtin_labels);

    Ok(())
}

#[test]
fn half_of_an_odd_amount_is_printed_exactly() -> TestResult {
    let menu = Menu::with_items(
        [MenuItem::new("ITEM0099", "咸菜", Money::from_minor(5, CNY))],
        CNY,
    )?;
    let promotions = [Promotion::HalfPriceOnItems(HalfPricePromotion::new([
        "ITEM0099",
    ]))];

    let receipt = best_charge(["ITEM0099 x 1"], &menu, &promotions)?;

    let expected = "============= 订餐明细 =============
咸菜 x 1 = 0.05元
-----------------------------------
使用优惠:
指定菜品半价(咸菜)，省0.025元
-----------------------------------
总计：0.025元
===================================";

    assert_eq!(receipt, expected);

    Ok(())
}
