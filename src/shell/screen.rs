//! Console rendering.

use std::io::Write;

use remit_api::ResourceKind;
use remit_auth::{RedirectReason, Route};
use remit_realtime::notification::Notification;
use remit_realtime::{ChannelStatus, Toast};

use crate::output;

/// Prompt line for the current location.
pub fn prompt_text(location: &str, unseen: Option<u64>) -> String {
    match unseen {
        Some(0) | None => format!("remit {} > ", location),
        Some(n) => format!("remit {} [{} new] > ", location, n),
    }
}

/// Print the prompt without a newline.
pub fn print_prompt(location: &str, unseen: Option<u64>) {
    print!("{}", prompt_text(location, unseen));
    let _ = std::io::stdout().flush();
}

/// Navigation bar with the current entry starred. Entries past the primary
/// ones are grouped under "More".
pub fn navigation_bar(current: Route) -> String {
    let entry = |route: &Route| {
        let selected = *route == current
            || (current == Route::Home && *route == Route::Transactions);
        if selected {
            format!("*{}*", route.label())
        } else {
            route.label().to_string()
        }
    };

    let (primary, more) = Route::NAVIGATION.split_at(Route::PRIMARY_COUNT);
    let primary: Vec<String> = primary.iter().map(entry).collect();
    let more: Vec<String> = more.iter().map(entry).collect();
    format!("{} | More: {}", primary.join(" | "), more.join(", "))
}

/// Resource listed on a protected route.
pub fn resource_for(route: Route) -> ResourceKind {
    match route {
        Route::Home | Route::Transactions | Route::Notifications => ResourceKind::Transactions,
        Route::Countries => ResourceKind::Countries,
        Route::Currencies => ResourceKind::Currencies,
        // The exchange-rates page shows the currency rate table; the rates
        // page edits the exchange-rate records.
        Route::ExchangeRates => ResourceKind::Rates,
        Route::Fees => ResourceKind::Fees,
        Route::ReceivingMethods => ResourceKind::ReceivingMethods,
        Route::PaymentMethods => ResourceKind::PaymentMethods,
        Route::Rates => ResourceKind::ExchangeRates,
        Route::Users => ResourceKind::Users,
    }
}

/// Print the header of a protected view.
pub fn print_view_header(route: Route) {
    println!();
    println!("{}", navigation_bar(route));
    let title = match route {
        Route::Notifications => "Notifications",
        other => other.label(),
    };
    println!("== {} ==", title);
}

/// Print a toast on its own lines.
pub fn print_toast(notification: &Notification) {
    let toast = Toast::from_event(&notification.event);
    let severity = toast
        .severity()
        .map(|s| s.as_str().to_uppercase())
        .unwrap_or_else(|| "INFO".to_string());
    println!();
    println!(
        "🔔 [{}] {}",
        notification.received_at.format("%H:%M:%S"),
        severity
    );
    for line in toast.to_string().lines() {
        println!("   {}", line);
    }
}

/// Print a channel status change worth telling the operator about.
pub fn print_status(status: &ChannelStatus) {
    if let ChannelStatus::Failed(reason) = status {
        println!();
        output::print_warning(&format!("Live updates unavailable: {}", reason));
    }
}

/// Explain a redirect to the login screen.
pub fn print_redirect(reason: RedirectReason) {
    let message = match reason {
        RedirectReason::NoSession => "Please log in first",
        RedirectReason::NotAdmin => "This account is not an administrator",
        RedirectReason::UnknownRoute => "Unknown page",
    };
    output::print_warning(message);
}

/// Print the command list.
pub fn print_help() {
    println!("Commands:");
    output::print_kv("/<path>", "open a page, e.g. /fees or /notifications");
    output::print_kv("dismiss", "close the current notification");
    output::print_kv("read", "mark new transactions as read");
    output::print_kv("logout", "end the session");
    output::print_kv("quit", "leave the console");
    let pages: Vec<&str> = Route::NAVIGATION.iter().map(Route::path).collect();
    println!("Pages: {}", pages.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shows_badge() {
        assert_eq!(prompt_text("/fees", Some(0)), "remit /fees > ");
        assert_eq!(prompt_text("/fees", Some(3)), "remit /fees [3 new] > ");
        assert_eq!(prompt_text("/admin/login", None), "remit /admin/login > ");
    }

    #[test]
    fn test_navigation_bar_groups_extra_entries() {
        let bar = navigation_bar(Route::Fees);
        assert_eq!(
            bar,
            "Transactions | Countries | Currencies | Exchange rates | *Fees* | More: Receiving, Payment, Rates, Users"
        );
        assert!(navigation_bar(Route::Home).starts_with("*Transactions*"));
    }

    #[test]
    fn test_every_route_has_a_resource() {
        assert_eq!(resource_for(Route::Notifications), ResourceKind::Transactions);
        assert_eq!(resource_for(Route::Users), ResourceKind::Users);
    }

    #[test]
    fn test_routes_list_their_endpoints() {
        let cases = [
            (Route::Home, "/transactions"),
            (Route::Transactions, "/transactions"),
            (Route::Notifications, "/transactions"),
            (Route::Countries, "/country"),
            (Route::Currencies, "/currency/currencies"),
            (Route::ExchangeRates, "/currency/rates"),
            (Route::Rates, "/exchange-rates"),
            (Route::Fees, "/fees"),
            (Route::PaymentMethods, "/payment-type"),
            (Route::ReceivingMethods, "/receiving-type"),
            (Route::Users, "/users"),
        ];
        for (route, path) in cases {
            assert_eq!(resource_for(route).list_path(), path, "{route:?}");
        }
    }
}
