//! Shared drawing utilities for PDF guide operations

use crate::style::Color;
use lopdf::{Object, content::Operation};

/// Check if a string represents a PDF operator
pub fn is_pdf_operator(name: &str) -> bool {
    match name {
        // Text operators
        "BT" | "ET" | "Tf" | "Td" | "Tj" | "TJ" | "Tm" => true,
        // Color operators
        "rg" | "RG" | "g" | "G" => true,
        // Graphics state save/restore
        "q" | "Q" => true,
        // Path construction
        "m" | "l" | "c" | "v" | "y" | "h" | "re" => true,
        // Path painting
        "S" | "s" | "f" | "F" | "f*" | "B" | "B*" | "b" | "b*" | "n" => true,
        // Line width
        "w" => true,
        _ => false,
    }
}

/// Draw a filled rectangle
pub fn draw_rectangle_fill(x: f32, y: f32, width: f32, height: f32, color: Color) -> Vec<Object> {
    vec![
        Object::Name(b"rg".to_vec()),
        color.r.into(),
        color.g.into(),
        color.b.into(),
        Object::Name(b"re".to_vec()),
        x.into(),
        y.into(),
        width.into(),
        height.into(),
        Object::Name(b"f".to_vec()),
    ]
}

/// Set stroke color and width for drawing operations
pub fn set_stroke_style(color: Color, width: f32) -> Vec<Object> {
    vec![
        Object::Name(b"RG".to_vec()),
        color.r.into(),
        color.g.into(),
        color.b.into(),
        Object::Name(b"w".to_vec()),
        width.into(),
    ]
}

/// Draw a vertical line
pub fn draw_vertical_line(x: f32, start_y: f32, end_y: f32) -> Vec<Object> {
    vec![
        Object::Name(b"m".to_vec()),
        x.into(),
        start_y.into(),
        Object::Name(b"l".to_vec()),
        x.into(),
        end_y.into(),
        Object::Name(b"S".to_vec()),
    ]
}

/// Draw a horizontal line
pub fn draw_horizontal_line(start_x: f32, end_x: f32, y: f32) -> Vec<Object> {
    vec![
        Object::Name(b"m".to_vec()),
        start_x.into(),
        y.into(),
        Object::Name(b"l".to_vec()),
        end_x.into(),
        y.into(),
        Object::Name(b"S".to_vec()),
    ]
}

/// Draw a single line of text with its left edge at `x` and baseline at `y`
///
/// `encoded` carries pre-encoded glyph IDs for embedded fonts; without it
/// the text is written as a literal string.
pub fn draw_text(
    text: &str,
    encoded: Option<Vec<u8>>,
    font_name: &str,
    font_size: f32,
    color: Color,
    x: f32,
    y: f32,
) -> Vec<Object> {
    let string = match encoded {
        Some(bytes) => Object::String(bytes, lopdf::StringFormat::Hexadecimal),
        None => Object::string_literal(text),
    };

    vec![
        Object::Name(b"BT".to_vec()),
        Object::Name(b"Tf".to_vec()),
        Object::Name(font_name.as_bytes().to_vec()),
        font_size.into(),
        Object::Name(b"rg".to_vec()),
        color.r.into(),
        color.g.into(),
        color.b.into(),
        Object::Name(b"Td".to_vec()),
        x.into(),
        y.into(),
        Object::Name(b"Tj".to_vec()),
        string,
        Object::Name(b"ET".to_vec()),
    ]
}

/// Convert a flat list of operators and operands to content operations
///
/// Each operator name is followed by its operands. Names that are not
/// operators (such as font resource names) are kept as operands.
pub fn objects_to_operations(objects: &[Object]) -> Vec<Operation> {
    let mut operations: Vec<Operation> = Vec::new();

    for object in objects {
        if let Object::Name(name) = object {
            let name_str = String::from_utf8_lossy(name);
            if is_pdf_operator(&name_str) {
                operations.push(Operation::new(&name_str, vec![]));
                continue;
            }
        }

        match operations.last_mut() {
            Some(op) => op.operands.push(object.clone()),
            None => tracing::trace!("Dropping operand without an operator: {:?}", object),
        }
    }

    operations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_to_operations_keeps_font_name_as_operand() {
        let objects = draw_text("5", None, "F1", 6.0, Color::black(), 10.0, 20.0);
        let ops = objects_to_operations(&objects);

        let operators: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
        assert_eq!(ops[1].operands.len(), 2);
        assert!(matches!(&ops[1].operands[0], Object::Name(name) if name == b"F1"));
    }

    #[test]
    fn test_rectangle_fill_operations() {
        let ops = objects_to_operations(&draw_rectangle_fill(1.0, 2.0, 3.0, 4.0, Color::black()));
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[1].operator, "re");
        assert_eq!(ops[1].operands.len(), 4);
        assert!(ops[2].operands.is_empty());
    }

    #[test]
    fn test_hex_encoded_text() {
        let objects = draw_text("1", Some(vec![0, 20]), "F2", 6.0, Color::black(), 0.0, 0.0);
        assert!(objects.iter().any(|object| matches!(
            object,
            Object::String(bytes, lopdf::StringFormat::Hexadecimal) if bytes == &[0, 20]
        )));
    }
}
