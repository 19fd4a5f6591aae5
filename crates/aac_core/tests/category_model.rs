use aac_core::{AacPage, BoardError, Category, ItemValidationError, UNNAMED_CATEGORY_LABEL};

fn food() -> Category {
    Category::new("food", "img/food/plate.png")
}

#[test]
fn added_item_is_present_and_selectable() {
    let mut category = food();
    category
        .add_item("img/food/icons8-watermelon-96.png", "watermelon")
        .unwrap();

    assert!(category.has_image("img/food/icons8-watermelon-96.png"));
    assert_eq!(
        category.select("img/food/icons8-watermelon-96.png").unwrap(),
        "watermelon"
    );
}

#[test]
fn select_missing_image_returns_not_found() {
    let mut category = food();
    category.add_item("img/food/apple.png", "apple").unwrap();

    let err = category.select("img/food/pear.png").unwrap_err();
    assert!(matches!(
        err,
        BoardError::NotFound { ref image_loc } if image_loc == "img/food/pear.png"
    ));
    assert!(!category.has_image("img/food/pear.png"));
}

#[test]
fn repeated_image_overwrites_instead_of_appending() {
    let mut category = food();
    category.add_item("img/food/apple.png", "apple").unwrap();
    category.add_item("img/food/pear.png", "pear").unwrap();
    category.add_item("img/food/apple.png", "red apple").unwrap();

    assert_eq!(category.image_locs().len(), 2);
    assert_eq!(category.len(), 2);
    assert_eq!(category.select("img/food/apple.png").unwrap(), "red apple");
}

#[test]
fn empty_text_is_rejected_and_count_unchanged() {
    let mut category = food();
    category.add_item("img/food/apple.png", "apple").unwrap();

    let err = category.add_item("img/food/pear.png", "").unwrap_err();
    assert!(matches!(
        err,
        BoardError::InvalidArgument(ItemValidationError::EmptyText)
    ));

    let err = category.add_item("", "pear").unwrap_err();
    assert!(matches!(
        err,
        BoardError::InvalidArgument(ItemValidationError::EmptyImageLoc)
    ));

    assert_eq!(category.len(), 1);
    assert!(!category.has_image("img/food/pear.png"));
}

#[test]
fn new_category_lists_no_images() {
    let category = food();
    assert!(category.image_locs().is_empty());
    assert!(category.is_empty());
    assert_eq!(category.category(), "food");
}

#[test]
fn empty_name_reports_fallback_label() {
    let category = Category::new("", "img/misc.png");
    assert_eq!(category.category(), UNNAMED_CATEGORY_LABEL);
    assert_eq!(category.name(), "");
}

#[test]
fn category_serialization_uses_expected_wire_fields() {
    let mut category = food();
    category.add_item("img/food/apple.png", "apple").unwrap();

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["name"], "food");
    assert_eq!(json["image_loc"], "img/food/plate.png");
    assert_eq!(json["items"][0]["image_loc"], "img/food/apple.png");
    assert_eq!(json["items"][0]["text"], "apple");
}
