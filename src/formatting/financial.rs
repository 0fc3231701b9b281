//! Bitcoin price reports.

use super::{month_abbrev, signed_pct, usd};
use crate::models::{MonthlyReturn, PricePoint};
use std::collections::BTreeMap;

/// Points listed at the end of the historical report.
const RECENT_DAYS: usize = 5;

pub fn format_current_price(price: Option<&PricePoint>) -> String {
    let Some(price) = price else {
        return "❌ Não foi possível obter o preço atual do Bitcoin. Verifique a configuração da API."
            .to_string();
    };

    let mut out = String::from("₿ **Preço Atual do Bitcoin**\n\n");
    out.push_str(&format!("💰 **Preço**: {}\n", usd(price.price, 2)));
    out.push_str(&format!("📊 **Volume 24h**: {}\n", usd(price.volume, 0)));
    out.push_str(&format!("🏦 **Market Cap**: {}\n", usd(price.market_cap, 0)));
    out.push_str(&format!("📈 **Variação 24h**: {}\n", signed_pct(price.change_24h)));
    out.push_str(&format!("📅 **Variação 7d**: {}\n", signed_pct(price.change_7d)));
    out.push_str(&format!("📆 **Variação 30d**: {}\n", signed_pct(price.change_30d)));
    out.push_str(&format!("🕐 **Data**: {}\n", price.date));
    out
}

/// Range summary followed by the last few days.
pub fn format_historical_prices(points: &[PricePoint], start_date: &str, end_date: &str) -> String {
    if points.is_empty() {
        return format!(
            "❌ Não foi possível obter dados históricos do Bitcoin para o período {} a {}.",
            start_date, end_date
        );
    }

    let count = points.len() as f64;
    let mean_price = points.iter().map(|p| p.price).sum::<f64>() / count;
    let mean_volume = points.iter().map(|p| p.volume).sum::<f64>() / count;
    let max_price = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
    let min_price = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);

    let mut out = format!(
        "📈 **Dados Históricos do Bitcoin** ({} a {})\n\n",
        start_date, end_date
    );
    out.push_str(&format!("📊 **Total de dias**: {}\n", points.len()));
    out.push_str(&format!("💰 **Preço médio**: {}\n", usd(mean_price, 2)));
    out.push_str(&format!("📊 **Volume médio**: {}\n", usd(mean_volume, 0)));
    out.push_str(&format!("📈 **Preço máximo**: {}\n", usd(max_price, 2)));
    out.push_str(&format!("📉 **Preço mínimo**: {}\n", usd(min_price, 2)));

    out.push_str("\n**Últimos 5 dias:**\n");
    let recent = &points[points.len().saturating_sub(RECENT_DAYS)..];
    for point in recent {
        out.push_str(&format!(
            "• {}: {} ({})\n",
            point.date,
            usd(point.price, 2),
            signed_pct(point.change_24h)
        ));
    }

    out
}

/// Returns grouped by year, newest year first, then overall statistics.
///
/// The yearly total is the plain sum of the monthly percentages.
pub fn format_monthly_returns(returns: &[MonthlyReturn], years: i64) -> String {
    if returns.is_empty() {
        return format!(
            "❌ Não foi possível obter retornos mensais do Bitcoin para os últimos {} anos.",
            years
        );
    }

    let mut by_year: BTreeMap<i32, Vec<&MonthlyReturn>> = BTreeMap::new();
    for month in returns {
        by_year.entry(month.year).or_default().push(month);
    }

    let mut out = format!(
        "📊 **Retornos Mensais do Bitcoin** (Últimos {} anos)\n\n",
        years
    );

    for (year, months) in by_year.iter().rev() {
        out.push_str(&format!("**{}:**\n", year));
        for month in months {
            out.push_str(&format!(
                "  {}: {} ({} → {})\n",
                month_abbrev(month.month),
                signed_pct(month.return_percentage),
                usd(month.price_start, 0),
                usd(month.price_end, 0)
            ));
        }

        let total: f64 = months.iter().map(|m| m.return_percentage).sum();
        out.push_str(&format!("  **Total {}**: {}\n\n", year, signed_pct(total)));
    }

    let all: Vec<f64> = returns.iter().map(|m| m.return_percentage).collect();
    let count = all.len() as f64;
    let positive = all.iter().filter(|r| **r > 0.0).count();
    let negative = all.iter().filter(|r| **r < 0.0).count();
    let mean = all.iter().sum::<f64>() / count;
    let best = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let worst = all.iter().copied().fold(f64::INFINITY, f64::min);

    out.push_str("**📈 Estatísticas Gerais:**\n");
    out.push_str(&format!(
        "• Meses positivos: {} ({:.1}%)\n",
        positive,
        positive as f64 / count * 100.0
    ));
    out.push_str(&format!(
        "• Meses negativos: {} ({:.1}%)\n",
        negative,
        negative as f64 / count * 100.0
    ));
    out.push_str(&format!("• Retorno médio mensal: {}\n", signed_pct(mean)));
    out.push_str(&format!("• Melhor mês: {}\n", signed_pct(best)));
    out.push_str(&format!("• Pior mês: {}\n", signed_pct(worst)));

    out
}
