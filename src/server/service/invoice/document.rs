//! Printable HTML tax invoice.
//!
//! The page is self-contained (inline styles) so the browser's print dialog can save it
//! as a PDF. Every user-supplied value is escaped; notes are rendered from Markdown with
//! raw HTML shown as text and only http, https and mailto link targets kept.

use std::fmt::Write;

use pulldown_cmark::{escape::escape_html, html, CowStr, Event, Options, Parser, Tag};

use crate::{
    model::invoice::{format_money, TAX_RATE},
    server::model::{client::Client, company::Company, invoice::Invoice},
};

const STYLE: &str = "\
body{font-family:Helvetica,Arial,sans-serif;color:#1f2937;margin:0;padding:40px}\
.header{display:flex;justify-content:space-between;border-bottom:2px solid #2563eb;padding-bottom:16px}\
.title{font-size:28px;font-weight:bold;color:#2563eb}\
.muted{color:#6b7280;font-size:13px}\
.parties{display:flex;justify-content:space-between;margin:24px 0}\
table{width:100%;border-collapse:collapse;margin-top:16px}\
th{background:#f3f4f6;text-align:left;padding:8px;font-size:13px}\
td{padding:8px;border-bottom:1px solid #e5e7eb;font-size:13px}\
.num{text-align:right}\
.totals{margin-left:auto;width:280px;margin-top:16px}\
.totals div{display:flex;justify-content:space-between;padding:4px 0}\
.due{font-weight:bold;font-size:16px;border-top:2px solid #1f2937}\
.section{margin-top:24px}\
footer{margin-top:40px;text-align:center;color:#6b7280;font-size:12px}\
@media print{body{padding:0}}";

/// Renders an invoice issued by `company` to `client` as a complete HTML page.
pub fn render_invoice(company: &Company, client: Option<&Client>, invoice: &Invoice) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_document(&mut out, company, client, invoice);

    out
}

fn write_document(
    out: &mut String,
    company: &Company,
    client: Option<&Client>,
    invoice: &Invoice,
) -> std::fmt::Result {
    write!(
        out,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Invoice {}</title><style>{}</style></head><body>",
        escape(&invoice.invoice_number),
        STYLE
    )?;

    write!(out, "<div class=\"header\"><div><div class=\"title\">{}</div>", escape(&company.name))?;
    if let Some(registration) = non_empty(&company.registration_number) {
        write!(out, "<div class=\"muted\">Reg. No: {}</div>", escape(registration))?;
    }
    if let Some(vat) = non_empty(&company.vat_number) {
        write!(out, "<div class=\"muted\">VAT No: {}</div>", escape(vat))?;
    }
    write!(
        out,
        "</div><div class=\"num\"><div class=\"title\">TAX INVOICE</div>\
         <div class=\"muted\">Invoice #: {}</div>\
         <div class=\"muted\">Date: {}</div>\
         <div class=\"muted\">Due: {}</div></div></div>",
        escape(&invoice.invoice_number),
        invoice.date.format("%Y-%m-%d"),
        invoice.due_date.format("%Y-%m-%d"),
    )?;

    out.push_str("<div class=\"parties\"><div><strong>From</strong>");
    write!(out, "<div>{}</div>", escape(&company.name))?;
    let address = company.address.one_line();
    if !address.is_empty() {
        write!(out, "<div class=\"muted\">{}</div>", escape(&address))?;
    }
    write!(
        out,
        "<div class=\"muted\">{}</div><div class=\"muted\">{}</div></div>",
        escape(&company.email),
        escape(&company.phone)
    )?;

    out.push_str("<div><strong>Bill To</strong>");
    let client_name = client
        .map(|client| client.name.as_str())
        .or(invoice.client_name.as_deref())
        .unwrap_or("-");
    write!(out, "<div>{}</div>", escape(client_name))?;
    if let Some(client) = client {
        if let Some(email) = non_empty(&client.email) {
            write!(out, "<div class=\"muted\">{}</div>", escape(email))?;
        }
        if let Some(phone) = non_empty(&client.phone) {
            write!(out, "<div class=\"muted\">{}</div>", escape(phone))?;
        }
    }
    out.push_str("</div></div>");

    out.push_str(
        "<table><thead><tr><th>Date</th><th>Description</th>\
         <th class=\"num\">Hours</th><th class=\"num\">Rate</th><th class=\"num\">Amount</th>\
         </tr></thead><tbody>",
    );
    for item in &invoice.items {
        let date = item
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">R{}</td><td class=\"num\">R{}</td></tr>",
            date,
            escape(&item.description),
            format_money(item.hours),
            format_money(item.rate),
            format_money(item.amount),
        )?;
    }
    out.push_str("</tbody></table>");

    write!(
        out,
        "<div class=\"totals\"><div><span>Subtotal</span><span>R{}</span></div>\
         <div><span>VAT ({}%)</span><span>R{}</span></div>\
         <div class=\"due\"><span>Total Due</span><span>R{}</span></div></div>",
        format_money(invoice.totals.subtotal),
        (TAX_RATE * 100.0).round(),
        format_money(invoice.totals.tax),
        format_money(invoice.totals.total),
    )?;

    if let Some(bank_name) = non_empty(&company.banking.bank_name) {
        write!(
            out,
            "<div class=\"section\"><strong>Banking Details</strong><div class=\"muted\">Bank: {}</div>",
            escape(bank_name)
        )?;
        let banking = &company.banking;
        for (label, value) in [
            ("Account Holder", &banking.account_holder),
            ("Account Number", &banking.account_number),
            ("Branch Code", &banking.branch_code),
            ("Account Type", &banking.account_type),
        ] {
            if let Some(value) = non_empty(value) {
                write!(out, "<div class=\"muted\">{}: {}</div>", label, escape(value))?;
            }
        }
        write!(
            out,
            "<div class=\"muted\">Reference: {}</div></div>",
            escape(&invoice.invoice_number)
        )?;
    }

    if let Some(notes) = non_empty(&invoice.notes) {
        write!(
            out,
            "<div class=\"section\"><strong>Notes</strong>{}</div>",
            markdown_to_html(notes)
        )?;
    }

    write!(
        out,
        "<footer>Thank you for your business. Generated by Trackify for {}.</footer></body></html>",
        escape(&company.name)
    )
}

/// Markdown to HTML with raw HTML blocks and inline tags rendered as plain text.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            Event::Start(Tag::Link(kind, dest, title)) => {
                Event::Start(Tag::Link(kind, safe_destination(dest), title))
            }
            Event::Start(Tag::Image(kind, dest, title)) => {
                Event::Start(Tag::Image(kind, safe_destination(dest), title))
            }
            event => event,
        });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

/// Drops link targets other than http, https, mailto and relative paths.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    let lower = dest.trim().to_ascii_lowercase();
    let scheme = lower.split_once(':').map(|(scheme, _)| scheme);
    match scheme {
        None | Some("http") | Some("https") | Some("mailto") => dest,
        Some(_) => CowStr::Borrowed(""),
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut escaped, value);
    escaped
}
