//! Server-rendered mini-app page.
//!
//! Plain HTML forms, no scripts. While any card is responded the page asks
//! the browser to reload after the reset window so the button comes back.

use common::effect::{Particle, ResponseEffect};
use common::{CardView, FeedView, RESPONSE_RESET, Theme};

pub fn render_page(view: &FeedView, theme: &Theme) -> String {
    let mut out = String::new();
    let refresh = if view.any_responded() {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">",
            RESPONSE_RESET.as_secs()
        )
    } else {
        String::new()
    };

    out.push_str(&format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {refresh}\n<title>{title}</title>\n<style>{css}</style>\n</head>\n<body>\n",
        title = escape(&view.title),
        css = stylesheet(theme),
    ));

    out.push_str(&format!(
        "<section class=\"panel\">\n<h2>{title}</h2>\n<p class=\"muted\">{subtitle}</p>\n<div class=\"toggles\">\n",
        title = escape(&view.title),
        subtitle = escape(&view.subtitle),
    ));
    for toggle in &view.toggles {
        out.push_str(&format!(
            "<form method=\"post\" action=\"/orders/filter/{value}\">\
             <button class=\"toggle{active}\">{label}</button></form>\n",
            value = toggle.value,
            active = if toggle.active { " active" } else { "" },
            label = escape(&toggle.label),
        ));
    }
    out.push_str(&format!(
        "</div>\n<div class=\"stats\">\n\
         <div class=\"stat\"><div class=\"muted\">{total_label}</div><div class=\"big\">{total}</div></div>\n\
         <div class=\"stat\"><div class=\"muted\">{average_label}</div><div class=\"big\">{average}</div></div>\n\
         </div>\n</section>\n<h3>{section}</h3>\n",
        total_label = escape(&view.total_label),
        total = view.total,
        average_label = escape(&view.average_label),
        average = escape(&view.average_price),
        section = escape(&view.section_label),
    ));

    for card in &view.cards {
        render_card(&mut out, card, theme);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_card(out: &mut String, card: &CardView, theme: &Theme) {
    let labels = &theme.labels;
    out.push_str(&format!(
        "<article class=\"card\">\n\
         <header><div><div class=\"muted\">{title}</div><small>{posted}</small></div>\
         <span class=\"chip\">{per_shift}</span></header>\n\
         <div class=\"price\">{price}</div>\n\
         <div class=\"block\"><small>{address_label}</small><div>{a0}</div><div class=\"muted\">{a1}</div></div>\n\
         <div class=\"block\"><small>{task_label}</small><div>{t0}</div><div class=\"muted\">{t1}</div></div>\n\
         <div class=\"block\"><small>{customer_label}</small>\
         <div class=\"customer\"><span>{handle}</span><span>&#9733; {rating}</span></div></div>\n",
        title = escape(&card.title),
        posted = escape(&card.posted_ago),
        per_shift = escape(&labels.per_shift),
        price = escape(&card.price),
        address_label = escape(&labels.address),
        a0 = escape(&card.address[0]),
        a1 = escape(&card.address[1]),
        task_label = escape(&labels.description),
        t0 = escape(&card.task[0]),
        t1 = escape(&card.task[1]),
        customer_label = escape(&labels.customer),
        handle = escape(&card.customer_handle),
        rating = escape(&card.rating),
    ));

    out.push_str(&format!(
        "<form method=\"post\" action=\"/orders/{id}/respond\">\
         <button class=\"respond{pulse}\"{disabled}>",
        id = card.id,
        pulse = if card.effect.is_some() { " pulse" } else { "" },
        disabled = if card.respond_enabled { "" } else { " disabled" },
    ));
    if let Some(effect) = &card.effect {
        render_effect(out, effect);
    }
    out.push_str(&format!(
        "<span class=\"label\">{}</span></button></form>\n</article>\n",
        escape(&card.respond_label)
    ));
}

fn render_effect(out: &mut String, effect: &ResponseEffect) {
    for ripple in &effect.ripples {
        out.push_str(&format!(
            "<span class=\"ripple\" style=\"--s0:{};--s1:{};--o0:{};--o1:{};\
             animation-duration:{}ms;animation-delay:{}ms\"></span>",
            ripple.scale_from,
            ripple.scale_to,
            ripple.opacity_from,
            ripple.opacity_to,
            ripple.duration_ms,
            ripple.delay_ms,
        ));
    }
    for particle in &effect.particles {
        render_particle(out, particle);
    }
}

fn render_particle(out: &mut String, particle: &Particle) {
    out.push_str(&format!(
        "<span class=\"particle\" style=\"--dx:{:.1}px;--dy:{:.1}px;\
         animation-duration:{}ms;animation-delay:{}ms\"></span>",
        particle.dx, particle.dy, particle.duration_ms, particle.delay_ms,
    ));
}

/// Keyframes spread evenly over the animation, one per value.
fn keyframes(name: &str, values: &[f64], property: impl Fn(f64) -> String) -> String {
    let last = values.len().saturating_sub(1).max(1) as f64;
    let mut css = format!("@keyframes {name}{{");
    for (i, v) in values.iter().enumerate() {
        css.push_str(&format!("{}%{{{}}}", (i as f64 / last * 100.0).round(), property(*v)));
    }
    css.push('}');
    css
}

fn stylesheet(theme: &Theme) -> String {
    let p = &theme.palette;
    let effect = ResponseEffect::new();
    let pulse = keyframes("pulse", &effect.pulse.scale, |s| {
        format!("transform:scale({s})")
    });

    // Particles share one trajectory shape; only the end offset differs.
    let particle = effect
        .particles
        .first()
        .map(|first| {
            let last = first.scale.len().min(first.opacity.len()).saturating_sub(1).max(1) as f64;
            let mut css = String::from("@keyframes particle{");
            for (i, (s, o)) in first.scale.iter().zip(&first.opacity).enumerate() {
                let t = i as f64 / last;
                css.push_str(&format!(
                    "{pct}%{{transform:translate(calc(var(--dx) * {t}),calc(var(--dy) * {t})) scale({s});opacity:{o}}}",
                    pct = (t * 100.0).round(),
                ));
            }
            css.push('}');
            css
        })
        .unwrap_or_default();

    format!(
        "body{{margin:0;padding:16px;background:{bg};color:{text};font-family:system-ui,sans-serif}}\
         .muted{{color:{muted}}}\
         .panel{{background:linear-gradient(135deg,{panel},{card});border-radius:16px;padding:16px;margin-bottom:16px}}\
         .toggles{{display:flex;gap:8px;margin:12px 0}}.toggles form{{flex:1}}\
         .toggle{{width:100%;padding:10px;border:0;border-radius:12px;background:rgba(255,255,255,.05);color:{text};font-weight:600}}\
         .toggle.active{{background:rgba(255,255,255,.2)}}\
         .stats{{display:grid;grid-template-columns:1fr 1fr;gap:8px}}\
         .stat{{background:rgba(0,0,0,.2);border-radius:12px;padding:12px}}.big{{font-size:24px;font-weight:700}}\
         .card{{background:{card};border-radius:16px;padding:16px;margin-bottom:12px}}\
         .card header{{display:flex;justify-content:space-between;margin-bottom:12px}}\
         .chip{{font-size:12px;color:{muted}}}\
         .price{{font-size:30px;font-weight:700;color:{price};margin-bottom:12px}}\
         .block{{background:{bg};border-radius:12px;padding:12px;margin-bottom:12px}}\
         .block small{{text-transform:uppercase;color:{muted}}}\
         .customer{{display:flex;justify-content:space-between}}\
         .respond{{position:relative;overflow:hidden;width:100%;padding:14px;border:0;border-radius:12px;\
         background:{accent};color:#000;font-weight:700}}\
         .respond .label{{position:relative;z-index:1}}\
         .pulse{{animation:pulse {pulse_ms}ms}}\
         .ripple{{position:absolute;inset:0;background:#fff;border-radius:12px;opacity:0;\
         animation-name:ripple;animation-timing-function:ease-out;animation-fill-mode:both}}\
         .particle{{position:absolute;top:50%;left:50%;width:8px;height:8px;border-radius:50%;\
         background:{particle_color};z-index:2;opacity:0;\
         animation-name:particle;animation-timing-function:ease-out;animation-fill-mode:both}}\
         @keyframes ripple{{from{{transform:scale(var(--s0));opacity:var(--o0)}}to{{transform:scale(var(--s1));opacity:var(--o1)}}}}\
         {pulse}{particle}",
        bg = p.background,
        text = p.text,
        muted = p.muted,
        panel = p.panel,
        card = p.card,
        price = p.price,
        accent = p.accent,
        particle_color = p.particle,
        pulse_ms = effect.pulse.duration_ms,
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
