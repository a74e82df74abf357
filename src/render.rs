//! Plain-text rendering of manager state.

use std::io::{self, Write};

use catalogo_forms::FormErrors;
use catalogo_manager::ProductoRow;
use catalogo_model::{Categoria, EntityId, ProductoDetalle};

/// Left-aligned columns separated by two spaces, sized to the widest cell.
fn table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
  let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
  for row in rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let line = |cells: Vec<&str>| -> String {
    cells
      .iter()
      .zip(&widths)
      .map(|(cell, width)| format!("{:<width$}", cell, width = width))
      .collect::<Vec<_>>()
      .join("  ")
      .trim_end()
      .to_string()
  };

  writeln!(out, "{}", line(header.to_vec()))?;
  for row in rows {
    writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
  }
  Ok(())
}

pub fn categorias<W: Write>(out: &mut W, categorias: &[Categoria]) -> io::Result<()> {
  if categorias.is_empty() {
    return writeln!(out, "No categories yet.");
  }
  let rows: Vec<Vec<String>> = categorias
    .iter()
    .map(|c| vec![c.id.to_string(), c.nombre.clone()])
    .collect();
  table(out, &["ID", "NAME"], &rows)
}

/// Product table, with the orphan banner above it when there is one.
/// Orphaned rows are marked with `!`.
pub fn productos<W: Write>(
  out: &mut W,
  rows: &[ProductoRow],
  warning: Option<&str>,
) -> io::Result<()> {
  if let Some(warning) = warning {
    writeln!(out, "{}", warning)?;
    writeln!(out)?;
  }
  if rows.is_empty() {
    return writeln!(out, "No products yet.");
  }
  let cells: Vec<Vec<String>> = rows
    .iter()
    .map(|r| {
      vec![
        if r.orphaned { "!" } else { "" }.to_string(),
        r.id.to_string(),
        r.nombre.clone(),
        r.precio_label(),
        r.categoria.clone(),
      ]
    })
    .collect();
  table(out, &["", "ID", "NAME", "PRICE", "CATEGORY"], &cells)
}

pub fn detalle<W: Write>(out: &mut W, detalle: &ProductoDetalle, categoria: &str) -> io::Result<()> {
  let producto = &detalle.producto;
  writeln!(out, "ID:       {}", producto.id)?;
  writeln!(out, "Name:     {}", producto.nombre)?;
  writeln!(out, "Price:    {:.2}", producto.precio.unwrap_or_default())?;
  writeln!(out, "Category: {}", categoria)
}

/// Category ids a product can point at.
pub fn categoria_options<W: Write>(out: &mut W, options: &[(EntityId, &str)]) -> io::Result<()> {
  if options.is_empty() {
    return writeln!(out, "No categories available.");
  }
  writeln!(out, "Available categories:")?;
  for (id, nombre) in options {
    writeln!(out, "  {}  {}", id, nombre)?;
  }
  Ok(())
}

/// One line per invalid field.
pub fn field_errors<W: Write>(out: &mut W, errors: &FormErrors) -> io::Result<()> {
  for (field, error) in errors.iter() {
    writeln!(out, "  {}: {}", field, error)?;
  }
  Ok(())
}
