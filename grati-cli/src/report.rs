//! Plain-text rendering of a worksheet result.
//!
//! Shows the computable-remuneration breakdown first, then the totals,
//! with the income-tax rows only when something was actually withheld.
//! User-facing labels stay in Spanish.

use rust_decimal::Decimal;

use grati_core::GratificationResult;

use crate::utils::format_currency;

const LABEL_WIDTH: usize = 30;

fn row(
    out: &mut String,
    label: &str,
    value: &str,
) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value:>14}\n"));
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Renders the full result block.
pub fn render(result: &GratificationResult) -> String {
    let mut out = String::new();

    out.push_str("Resultado del Cálculo\n");
    out.push_str("=====================\n\n");

    out.push_str("Remuneración computable\n");
    row(&mut out, "  Sueldo mensual", &format_currency(result.salary_input));
    row(
        &mut out,
        "  Asignación familiar",
        &format_currency(result.family_allowance),
    );
    row(
        &mut out,
        "  Promedio de bonos",
        &format_currency(result.average_bonuses),
    );
    row(
        &mut out,
        "  Promedio de horas extras",
        &format_currency(result.average_overtime),
    );
    row(
        &mut out,
        "  Base de cálculo",
        &format_currency(result.computation_base),
    );
    row(
        &mut out,
        "  Meses computados",
        &result.months_worked.to_string(),
    );
    row(
        &mut out,
        "  Régimen pequeña empresa",
        if result.is_small_company { "Sí" } else { "No" },
    );
    row(
        &mut out,
        "  Tasa de bonificación",
        &percent(result.insurance_rate),
    );
    out.push('\n');

    row(
        &mut out,
        "Gratificación Base",
        &format_currency(result.base_gratification),
    );
    row(
        &mut out,
        "Bonificación Extraordinaria",
        &format_currency(result.extraordinary_bonus),
    );

    if result.income_tax > Decimal::ZERO {
        row(&mut out, "Total Bruto", &format_currency(result.gross_total));
        row(
            &mut out,
            "Imp. a la Renta (5ta Cat.)",
            &format!("- {}", format_currency(result.income_tax)),
        );
        row(
            &mut out,
            "Total Neto a Recibir",
            &format_currency(result.net_total),
        );
    } else {
        row(
            &mut out,
            "Total a Recibir",
            &format_currency(result.gross_total),
        );
    }

    out
}
