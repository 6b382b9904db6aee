use std::fmt::Write as _;

use client_core::{UserCard, UsersPage};

pub fn render_page(page: &UsersPage) -> String {
    let mut out = String::new();
    if page.store().is_empty() {
        out.push_str("No users.\n");
        return out;
    }
    for card in page.cards() {
        render_card(&mut out, card);
        out.push('\n');
    }
    out
}

fn render_card(out: &mut String, card: UserCard<'_>) {
    let user = card.user;
    let marker = if card.expanded { "[-]" } else { "[+]" };
    let _ = writeln!(
        out,
        "{marker} #{} {} (@{}) <{}>",
        user.id, user.name, user.username, user.email
    );

    if card.expanded {
        let address = &user.address;
        let _ = writeln!(out, "    phone:   {}", user.phone);
        let _ = writeln!(out, "    website: {}", user.website);
        let _ = writeln!(
            out,
            "    address: {}, {}, {} {} ({}, {})",
            address.street,
            address.suite,
            address.city,
            address.zipcode,
            address.geo.lat,
            address.geo.lng
        );
        let _ = writeln!(
            out,
            "    company: {} - \"{}\" ({})",
            user.company.name, user.company.catch_phrase, user.company.bs
        );
    }

    if card.show_posts {
        let _ = writeln!(out, "    Posts by {}:", user.name);
        for post in &user.posts {
            let _ = writeln!(out, "      - {}", post.title);
        }
    }
}
