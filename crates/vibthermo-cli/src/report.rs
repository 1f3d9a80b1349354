use std::fmt::Write;
use vibthermo::core::constants::ev_to_kj_per_mol;
use vibthermo::core::statmech::properties::ThermoProperties;

const COLUMNS: [&str; 9] = [
    "T (K)", "q", "Cv/R", "Cp/R", "U/RT", "H/RT", "S/R", "A/RT", "G/RT",
];
const COLUMN_WIDTH: usize = 14;

/// Renders the property table printed by `eval`.
///
/// The zero-point energy does not depend on temperature and is reported once
/// below the table, in eV and kJ/mol.
pub fn render_table(model_class: &str, rows: &[ThermoProperties]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Model: {} ({} temperature(s))", model_class, rows.len());

    let header: String = COLUMNS
        .iter()
        .map(|name| format!("{:>width$}", name, width = COLUMN_WIDTH))
        .collect();
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(COLUMN_WIDTH * COLUMNS.len()));

    for row in rows {
        let _ = write!(out, "{:>width$.2}", row.t, width = COLUMN_WIDTH);
        for value in [
            row.q,
            row.cv_over_r,
            row.cp_over_r,
            row.u_over_rt,
            row.h_over_rt,
            row.s_over_r,
            row.a_over_rt,
            row.g_over_rt,
        ] {
            let _ = write!(out, "{:>width$.6e}", value, width = COLUMN_WIDTH);
        }
        out.push('\n');
    }

    if let Some(first) = rows.first() {
        let _ = writeln!(
            out,
            "ZPE: {:.6} eV ({:.4} kJ/mol)",
            first.zpe,
            ev_to_kj_per_mol(first.zpe)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibthermo::core::statmech::VibrationalModel;
    use vibthermo::core::statmech::harmonic::HarmonicVib;

    #[test]
    fn table_has_one_line_per_row_and_a_zpe_footer() {
        let model = HarmonicVib::new(vec![3825.434, 3710.2642, 1582.432]).unwrap();
        let rows = vec![
            model.properties(298.15).unwrap(),
            model.properties(500.0).unwrap(),
        ];

        let table = render_table("HarmonicVib", &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Model: HarmonicVib (2 temperature(s))"));
        assert!(lines[1].contains("S/R"));
        assert!(lines[3].trim_start().starts_with("298.15"));
        assert!(lines[4].trim_start().starts_with("500.00"));
        assert_eq!(lines[5], "ZPE: 0.565252 eV (54.5385 kJ/mol)");
    }

    #[test]
    fn empty_table_omits_zpe_footer() {
        let table = render_table("EmptyVib", &[]);
        assert_eq!(table.lines().count(), 3);
        assert!(!table.contains("ZPE"));
    }
}
