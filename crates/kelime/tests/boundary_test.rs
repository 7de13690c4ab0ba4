//! Tests for request decoding and verdict records, end to end.

use kelime::{BoundaryError, MoveRequest, VerdictRecord};
use kelime_rules::{Coordinate, Dictionary, MoveValidator, ValidationStatus};

fn check(request: &str, dictionary: &Dictionary) -> VerdictRecord {
    let request = MoveRequest::from_json(request).expect("Parse failed");
    let (board, placed) = request.decode().expect("Decode failed");
    VerdictRecord::from(MoveValidator::new(dictionary).validate(&placed, &board))
}

const KEDI_REQUEST: &str = r#"{
    "committedBoard": {},
    "placedTiles": [
        {"letter": "K", "row": 7, "col": 5, "id": "t1"},
        {"letter": "e", "row": 7, "col": 6, "id": "t2"},
        {"letter": "D", "row": 7, "col": 7, "id": "t3"},
        {"letter": "i", "row": 7, "col": 8, "isBlank": true, "id": "t4"}
    ]
}"#;

#[test]
fn test_accepted_move_wire_shape() {
    let dictionary = Dictionary::from_words(["kedi"]);
    let record = check(KEDI_REQUEST, &dictionary);

    let json = serde_json::to_value(&record).expect("Serialize failed");
    assert_eq!(
        json,
        serde_json::json!({
            "status": "Ok",
            "message": "valid placement",
            "validWords": [{
                "word": "KEDİ",
                "path": [
                    {"row": 7, "col": 5},
                    {"row": 7, "col": 6},
                    {"row": 7, "col": 7},
                    {"row": 7, "col": 8}
                ]
            }]
        })
    );
}

#[test]
fn test_rejected_word_wire_shape() {
    let dictionary = Dictionary::from_words(["köpek"]);
    let record = check(KEDI_REQUEST, &dictionary);

    assert_eq!(record.status(), &ValidationStatus::InvalidWord);
    assert_eq!(record.invalid_word().as_deref(), Some("KEDİ"));
    assert!(record.valid_words().is_none());

    let json = record.to_json().expect("Serialize failed");
    assert!(json.contains(r#""invalidWord":"KEDİ""#));
    assert!(!json.contains("validWords"));
}

#[test]
fn test_serialized_verdict_is_repeatable() {
    let dictionary = Dictionary::from_words(["kedi"]);
    let first = check(KEDI_REQUEST, &dictionary).to_json().expect("Serialize failed");
    let second = check(KEDI_REQUEST, &dictionary).to_json().expect("Serialize failed");
    assert_eq!(first, second);
}

#[test]
fn test_empty_tile_list_decodes_to_no_tiles_placed() {
    let dictionary = Dictionary::from_words(["kedi"]);
    let record = check(r#"{"committedBoard":{"7_7":"A"},"placedTiles":[]}"#, &dictionary);
    assert_eq!(record.status(), &ValidationStatus::NoTilesPlaced);
    assert_eq!(record.message(), "no tiles placed");
}

#[test]
fn test_extension_of_committed_board() {
    let dictionary = Dictionary::from_words(["evde"]);
    let record = check(
        r#"{"committedBoard":{"7_7":"E","7_8":"V"},
            "placedTiles":[{"letter":"D","row":7,"col":9},{"letter":"E","row":7,"col":10}]}"#,
        &dictionary,
    );
    assert_eq!(record.status(), &ValidationStatus::Ok);
    let words = record.valid_words().as_ref().expect("Expected words");
    assert_eq!(words[0].word(), "EVDE");
}

#[test]
fn test_malformed_board_key() {
    let request = MoveRequest::from_json(r#"{"committedBoard":{"7-7":"A"},"placedTiles":[]}"#)
        .expect("Parse failed");
    assert!(matches!(request.decode(), Err(BoundaryError::Coordinate(_))));
}

#[test]
fn test_out_of_range_tile() {
    let request = MoveRequest::from_json(
        r#"{"committedBoard":{},"placedTiles":[{"letter":"A","row":-1,"col":3}]}"#,
    )
    .expect("Parse failed");
    let error = request.decode().unwrap_err();
    assert!(matches!(error, BoundaryError::Coordinate(_)));
    assert!(error.to_string().contains("outside the 15x15 board"));
}

#[test]
fn test_multi_glyph_letter() {
    let request = MoveRequest::from_json(
        r#"{"committedBoard":{},"placedTiles":[{"letter":"AB","row":7,"col":7}]}"#,
    )
    .expect("Parse failed");
    let error = request.decode().unwrap_err();
    assert!(matches!(error, BoundaryError::Letter { .. }));
    assert!(error.to_string().starts_with("bad letter at 7_7"));
}

#[test]
fn test_tile_on_committed_cell() {
    let request = MoveRequest::from_json(
        r#"{"committedBoard":{"7_7":"A"},"placedTiles":[{"letter":"B","row":7,"col":7}]}"#,
    )
    .expect("Parse failed");
    assert_eq!(
        request.decode().unwrap_err(),
        BoundaryError::OccupiedCell(Coordinate::CENTER)
    );
}

#[test]
fn test_not_json() {
    assert!(matches!(
        MoveRequest::from_json("placedTiles: []"),
        Err(BoundaryError::Json(_))
    ));
}

#[test]
fn test_null_tile_list_is_no_tiles_placed() {
    let dictionary = Dictionary::from_words(["kedi"]);
    let record = check(r#"{"committedBoard":{},"placedTiles":null}"#, &dictionary);
    assert_eq!(record.status(), &ValidationStatus::NoTilesPlaced);
}

#[test]
fn test_null_committed_board_is_empty_board() {
    let request = MoveRequest::from_json(
        r#"{"committedBoard":null,"placedTiles":[{"letter":"A","row":7,"col":7}]}"#,
    )
    .expect("Parse failed");
    let (board, placed) = request.decode().expect("Decode failed");
    assert!(board.is_empty());
    assert_eq!(placed.len(), 1);
}

#[test]
fn test_committed_keys_naming_one_cell() {
    let request = MoveRequest::from_json(
        r#"{"committedBoard":{"7_7":"A","07_7":"B"},"placedTiles":[]}"#,
    )
    .expect("Parse failed");
    let error = request.decode().unwrap_err();
    assert_eq!(error, BoundaryError::DuplicateCell(Coordinate::CENTER));
    assert_eq!(error.to_string(), "board cell H8 listed more than once");
}

#[test]
fn test_rejected_word_comes_back_normalized() {
    let dictionary = Dictionary::from_words(["köpek"]);
    let record = check(
        r#"{"committedBoard":{},"placedTiles":[
            {"letter":"k","row":7,"col":6},
            {"letter":"ı","row":7,"col":7},
            {"letter":"r","row":7,"col":8}]}"#,
        &dictionary,
    );
    assert_eq!(record.status(), &ValidationStatus::InvalidWord);
    assert_eq!(record.invalid_word().as_deref(), Some("KIR"));
}
