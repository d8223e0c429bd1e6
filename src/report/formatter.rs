use crate::simulation::SimulationResult;
use crate::simulation::advanced::AdvancedResult;
use crate::validation::{Severity, ValidationResult};
use std::fmt::Write;

/// Formats simulation results into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a full simulation result as a multi-section report.
    pub fn format_result(result: &SimulationResult) -> String {
        let mut out = String::new();
        Self::write_result(&mut out, result);
        out
    }

    fn write_result(out: &mut String, result: &SimulationResult) {
        let p = &result.performance;
        let _ = writeln!(out, "Performance");
        let _ = writeln!(out, "  total latency   {} ms", Self::format_number(p.total_latency));
        let _ = writeln!(
            out,
            "  p50 / p99       {} ms / {} ms",
            Self::format_number(p.p50_latency),
            Self::format_number(p.p99_latency)
        );
        let _ = writeln!(out, "  ttfb            {} ms", Self::format_number(p.ttfb));
        let _ = writeln!(out, "  cache hit rate  {}", Self::format_percent(p.cache_hit_rate));
        let _ = writeln!(
            out,
            "  origin load     {} rps",
            Self::format_number(p.requests_reaching_origin)
        );

        let c = &result.cost;
        let _ = writeln!(out, "\nCost");
        let _ = writeln!(out, "  monthly         {}", Self::format_money(c.monthly));
        let _ = writeln!(out, "  per request     {:.8}", c.per_request);
        for entry in &c.breakdown {
            let _ = writeln!(out, "    {:<20} {}", entry.service, Self::format_money(entry.amount));
        }

        let s = &result.security;
        let _ = writeln!(out, "\nSecurity (score {}/100)", s.score);
        let _ = writeln!(out, "  ddos protection       {}", Self::format_flag(s.ddos_protection));
        let _ = writeln!(out, "  waf                   {}", Self::format_flag(s.waf_enabled));
        let _ = writeln!(
            out,
            "  encryption in transit {}",
            Self::format_flag(s.encryption_in_transit)
        );
        let _ = writeln!(
            out,
            "  encryption at rest    {}",
            Self::format_flag(s.encryption_at_rest)
        );

        let a = &result.availability;
        let _ = writeln!(out, "\nAvailability");
        let _ = writeln!(out, "  redundancy      {}%", a.redundancy_score);
        let _ = writeln!(out, "  est. uptime     {}", Self::format_percent(a.estimated_uptime));
        if !a.single_points_of_failure.is_empty() {
            let _ = writeln!(
                out,
                "  single points of failure: {}",
                a.single_points_of_failure.join(", ")
            );
        }

        if let Some(advanced) = &result.advanced {
            Self::write_advanced(out, advanced);
        }

        let _ = writeln!(out);
        out.push_str(&Self::format_validation(&result.validation));
    }

    fn write_advanced(out: &mut String, advanced: &AdvancedResult) {
        let latency = &advanced.latency_breakdown;
        let _ = writeln!(
            out,
            "\nLatency breakdown (p50 {} ms, p99 {} ms)",
            Self::format_number(latency.total_p50),
            Self::format_number(latency.total_p99)
        );
        for entry in &latency.per_service {
            let _ = writeln!(
                out,
                "    {:<20} p50 {:>8} ms  p99 {:>8} ms",
                entry.service,
                Self::format_number(entry.p50_ms),
                Self::format_number(entry.p99_ms)
            );
        }

        let scale = &advanced.scalability;
        let _ = writeln!(out, "\nScalability");
        match &scale.bottleneck_service {
            Some(name) => {
                let _ = writeln!(
                    out,
                    "  bottleneck      {} ({} rps max, {}% headroom)",
                    name,
                    Self::format_number(scale.max_rps),
                    Self::format_number(scale.headroom_percent)
                );
            }
            None => {
                let _ = writeln!(out, "  no compute services");
            }
        }
        let _ = writeln!(
            out,
            "  auto scaling    {}",
            Self::format_flag(scale.auto_scaling_enabled)
        );

        let cost = &advanced.operational_cost;
        let _ = writeln!(out, "\nCost by category");
        let _ = writeln!(out, "  compute         {}", Self::format_money(cost.compute));
        let _ = writeln!(out, "  storage         {}", Self::format_money(cost.storage));
        let _ = writeln!(out, "  data transfer   {}", Self::format_money(cost.data_transfer));
        let _ = writeln!(out, "  requests        {}", Self::format_money(cost.requests));
    }

    /// Format validation issues, one line each, prefixed by severity.
    pub fn format_validation(validation: &ValidationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Validation: {} ({} errors, {} warnings, {} info)",
            if validation.is_valid { "valid" } else { "invalid" },
            validation.error_count,
            validation.warning_count,
            validation.info_count
        );
        for issue in &validation.issues {
            let tag = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warn ",
                Severity::Info => "info ",
            };
            let _ = write!(out, "  [{}] {}", tag, issue.message);
            if !issue.node_ids.is_empty() {
                let _ = write!(out, " ({})", issue.node_ids.join(", "));
            }
            let _ = writeln!(out);
        }
        out
    }

    /// Whole numbers print without a fraction, everything else with two decimals.
    fn format_number(n: f64) -> String {
        if n.fract() == 0.0 {
            format!("{}", n as i64)
        } else {
            format!("{:.2}", n)
        }
    }

    fn format_money(amount: f64) -> String {
        format!("${:.2}", amount)
    }

    fn format_percent(fraction: f64) -> String {
        format!("{:.2}%", fraction * 100.0)
    }

    fn format_flag(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }
}
