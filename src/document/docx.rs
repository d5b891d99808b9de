use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};
use crate::types::{Result, StudyError};

/// Raw text of a .docx: one paragraph per block, separated by a blank line.
/// Runs are concatenated as-is; tabs and breaks become `\t` and `\n`.
/// Hyperlink text is kept inline, and every table cell paragraph is a block
/// of its own, in row order.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes).map_err(|e| StudyError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            _ => {}
        }
    }

    Ok(text)
}

fn push_paragraph(text: &mut String, paragraph: &Paragraph) {
    push_inline(text, &paragraph.children);
    text.push_str("\n\n");
}

fn push_inline(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(r) => push_run(text, r),
            ParagraphChild::Hyperlink(link) => push_inline(text, &link.children),
            ParagraphChild::Insert(ins) => {
                for c in &ins.children {
                    if let InsertChild::Run(r) = c {
                        push_run(text, r);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(text: &mut String, run: &Run) {
    for node in &run.children {
        match node {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn push_table(text: &mut String, table: &Table) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(text, p),
                    TableCellContent::Table(t) => push_table(text, t),
                    _ => {}
                }
            }
        }
    }
}
