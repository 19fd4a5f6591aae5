use aac_core::{AacPage, Board, BoardError, Category, ItemValidationError, LoadIssue};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;

const SAMPLE: &str = "img/food/plate.png food
>img/food/icons8-french-fries-96.png french fries
>img/food/icons8-watermelon-96.png watermelon
img/clothing/hanger.png clothing
>img/clothing/collaredshirt.png collared shirt
";

type Contents = BTreeMap<String, BTreeSet<(String, String)>>;

fn contents(board: &Board) -> Contents {
    board
        .categories()
        .map(|category| {
            let items: BTreeSet<(String, String)> = category
                .items()
                .map(|item| (item.image_loc().to_string(), item.text().to_string()))
                .collect();
            (category.name().to_string(), items)
        })
        .collect()
}

#[test]
fn load_sample_file_builds_two_categories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AACMappings.txt");
    fs::write(&path, SAMPLE).unwrap();

    let report = Board::load(&path).unwrap();
    assert!(report.is_clean());
    let mut board = report.into_board();

    assert_eq!(board.category_names(), vec!["food", "clothing"]);
    assert_eq!(board.get_category("food").unwrap().len(), 2);
    assert_eq!(board.get_category("clothing").unwrap().len(), 1);
    assert_eq!(
        board.get_category("food").unwrap().image_loc(),
        "img/food/plate.png"
    );

    board.reset().unwrap();
    assert_eq!(
        board.select("img/food/icons8-french-fries-96.png").unwrap(),
        "french fries"
    );
}

#[test]
fn save_then_load_round_trips_contents() {
    let mut board = Board::parse(SAMPLE).into_board();
    board.reset().unwrap();
    board.add_item("img/food/icons8-apple-96.png", "apple").unwrap();
    let mut extra = Category::new("feelings", "img/feelings/heart.png");
    extra.add_item("img/feelings/happy.png", "I am happy").unwrap();
    board.insert_category(extra).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.txt");
    board.save(&path).unwrap();

    let reloaded = Board::load(&path).unwrap();
    assert!(reloaded.is_clean());
    assert_eq!(contents(&reloaded.board), contents(&board));
    assert_eq!(
        reloaded.board.get_category("feelings").unwrap().image_loc(),
        "img/feelings/heart.png"
    );
}

#[test]
fn round_trip_preserves_inner_whitespace_and_unicode() {
    let mut board = Board::new();
    let mut drinks = Category::new("hot\tdrinks \u{00e9}t\u{00e9}", "img/drinks/cup.png");
    drinks.add_item("img/drinks/tea.png", "green\ttea").unwrap();
    drinks
        .add_item("img/drinks/cafe.png", "caf\u{00e9}\u{00a0}au  lait")
        .unwrap();
    drinks
        .add_item("img/drinks/\u{8336}.png", "\u{304a}\u{3000}\u{8336}")
        .unwrap();
    board.insert_category(drinks).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.txt");
    board.save(&path).unwrap();

    let reloaded = Board::load(&path).unwrap();
    assert!(reloaded.is_clean(), "issues: {:?}", reloaded.issues);
    assert_eq!(contents(&reloaded.board), contents(&board));
}

#[test]
fn padded_text_is_rejected_instead_of_changing_on_reload() {
    let mut board = Board::parse(SAMPLE).into_board();
    board.reset().unwrap();

    for text in ["  padded", "trailing ", "\ttabbed", "wide\u{3000}"] {
        assert!(matches!(
            board.add_item("img/food/a.png", text),
            Err(BoardError::InvalidArgument(ItemValidationError::PaddedText(_)))
        ));
    }
    assert!(!board.has_image("img/food/a.png"));

    board.add_item("img/food/a.png", "padded").unwrap();
    let mut reloaded = Board::parse(&board.to_text()).into_board();
    reloaded.reset().unwrap();
    assert_eq!(reloaded.select("img/food/a.png").unwrap(), "padded");
}

#[test]
fn unwritable_category_names_never_reach_the_file() {
    let mut board = Board::parse(SAMPLE).into_board();

    for name in ["", "   ", " food", "food ", "fo\nod"] {
        let mut category = Category::new(name, "img/misc.png");
        category.add_item("img/misc/a.png", "a").unwrap();
        assert!(
            matches!(board.insert_category(category), Err(BoardError::InvalidArgument(_))),
            "name {name:?} was accepted"
        );
    }
    for image_loc in ["misc.png", "img/my misc.png", ""] {
        assert!(matches!(
            board.insert_category(Category::new("misc", image_loc)),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    let reloaded = Board::parse(&board.to_text());
    assert!(reloaded.is_clean());
    assert_eq!(contents(&reloaded.board), contents(&board));
    assert_eq!(reloaded.board.category_names(), vec!["food", "clothing"]);
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, "stale content that should disappear\n".repeat(10)).unwrap();

    let board = Board::parse("img/food/plate.png food\n>img/food/apple.png apple\n").into_board();
    board.save(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "img/food/plate.png food\n>img/food/apple.png apple\n"
    );
}

#[test]
fn load_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = Board::load(&path).unwrap_err();
    assert!(matches!(err, BoardError::Io { path: ref failed, .. } if failed == &path));
}

#[test]
fn save_to_unwritable_path_keeps_board_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("board.txt");
    let board = Board::parse(SAMPLE).into_board();
    let before = board.clone();

    let err = board.save(&path).unwrap_err();
    assert!(matches!(err, BoardError::Io { .. }));
    assert_eq!(board, before);
}

#[test]
fn load_reports_skipped_lines_and_keeps_the_rest() {
    let text = "# home board\n>img/food/orphan.png orphan\nimg/food/plate.png food\n>img/food/apple.png\n>img/food/pear.png pear\n\nimg/clothing/hanger.png\n";
    let report = Board::parse(text);

    assert_eq!(report.board.category_names(), vec!["food"]);
    assert_eq!(report.board.get_category("food").unwrap().len(), 1);
    assert_eq!(
        report.issues,
        vec![
            LoadIssue::OrphanItem {
                line: 2,
                image_loc: "img/food/orphan.png".to_string(),
            },
            LoadIssue::MalformedLine {
                line: 4,
                content: ">img/food/apple.png".to_string(),
            },
            LoadIssue::MalformedLine {
                line: 7,
                content: "img/clothing/hanger.png".to_string(),
            },
        ]
    );
}

#[test]
fn duplicate_header_replaces_earlier_category() {
    let text = "img/food/plate.png food\n>img/food/apple.png apple\nimg/clothing/hanger.png clothing\nimg/food/bowl.png food\n>img/food/soup.png soup\n";
    let board = Board::parse(text).into_board();

    assert_eq!(board.category_names(), vec!["food", "clothing"]);
    let food = board.get_category("food").unwrap();
    assert_eq!(food.image_loc(), "img/food/bowl.png");
    assert_eq!(food.image_locs(), vec!["img/food/soup.png"]);
}

#[test]
fn empty_input_yields_empty_board() {
    let report = Board::parse("");
    assert!(report.is_clean());
    assert!(report.board.is_empty());
    assert_eq!(report.board.to_text(), "");
}
