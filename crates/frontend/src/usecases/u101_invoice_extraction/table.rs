//! Table models for the three result tabs

use super::state::{ResultStore, ResultTab};
use crate::shared::components::table::{format_number, ColumnDef, TableView};
use contracts::usecases::u101_invoice_extraction::{Customer, FieldValue, Invoice, Product};

pub const TABLE_ID_INVOICES: &str = "u101-invoices-table";
pub const TABLE_ID_PRODUCTS: &str = "u101-products-table";
pub const TABLE_ID_CUSTOMERS: &str = "u101-customers-table";

/// Shown for a customer without a phone number
pub const MISSING_PHONE: &str = "-";

const INVOICE_COLUMNS: [ColumnDef; 7] = [
    ColumnDef::text("Serial Number"),
    ColumnDef::text("Customer"),
    ColumnDef::text("Product"),
    ColumnDef::number("Qty"),
    ColumnDef::number("Tax"),
    ColumnDef::number("Total"),
    ColumnDef::text("Date"),
];

const PRODUCT_COLUMNS: [ColumnDef; 5] = [
    ColumnDef::text("Name"),
    ColumnDef::number("Quantity"),
    ColumnDef::number("Unit Price"),
    ColumnDef::number("Tax"),
    ColumnDef::number("Price with Tax"),
];

const CUSTOMER_COLUMNS: [ColumnDef; 3] = [
    ColumnDef::text("Customer Name"),
    ColumnDef::text("Phone"),
    ColumnDef::number("Total Purchase"),
];

/// Table for `tab`, rows in the order the service returned them
pub fn build_table(tab: ResultTab, store: &ResultStore) -> TableView {
    let empty_message = format!("No {} available", tab.kind());
    match tab {
        ResultTab::Invoices => TableView::new(
            TABLE_ID_INVOICES,
            INVOICE_COLUMNS.to_vec(),
            store.invoices().iter().map(invoice_row).collect(),
            empty_message,
        ),
        ResultTab::Products => TableView::new(
            TABLE_ID_PRODUCTS,
            PRODUCT_COLUMNS.to_vec(),
            store.products().iter().map(product_row).collect(),
            empty_message,
        ),
        ResultTab::Customers => TableView::new(
            TABLE_ID_CUSTOMERS,
            CUSTOMER_COLUMNS.to_vec(),
            store.customers().iter().map(customer_row).collect(),
            empty_message,
        ),
    }
}

/// Cell text for a field: strings verbatim, numbers in shortest form
fn cell_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Empty => String::new(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Number(n) => format_number(*n),
    }
}

fn invoice_row(inv: &Invoice) -> Vec<String> {
    [
        &inv.serial_number,
        &inv.customer_name,
        &inv.product_name,
        &inv.quantity,
        &inv.tax,
        &inv.total_amount,
        &inv.date,
    ]
    .into_iter()
    .map(cell_text)
    .collect()
}

fn product_row(p: &Product) -> Vec<String> {
    [&p.name, &p.quantity, &p.unit_price, &p.tax, &p.price_with_tax]
        .into_iter()
        .map(cell_text)
        .collect()
}

fn customer_row(c: &Customer) -> Vec<String> {
    let phone = match cell_text(&c.phone) {
        p if p.is_empty() => MISSING_PHONE.to_string(),
        p => p,
    };
    vec![cell_text(&c.name), phone, cell_text(&c.total_purchase_amount)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::TableBody;
    use contracts::usecases::u101_invoice_extraction::ExtractionResponse;

    fn store_from(json: &str) -> ResultStore {
        let mut store = ResultStore::default();
        store.replace_all(serde_json::from_str::<ExtractionResponse>(json).unwrap());
        store
    }

    fn titles(table: &TableView) -> Vec<&'static str> {
        table.columns.iter().map(|c| c.title).collect()
    }

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_invoice_example() {
        let store = store_from(
            r#"{"invoices": [{"serialNumber": "INV-1", "customerName": "Acme",
                "productName": "Widget", "quantity": 2, "tax": 5,
                "totalAmount": 105, "date": "2024-01-01"}],
                "products": [], "customers": []}"#,
        );

        let invoices = build_table(ResultTab::Invoices, &store);
        assert_eq!(
            titles(&invoices),
            vec!["Serial Number", "Customer", "Product", "Qty", "Tax", "Total", "Date"]
        );
        assert_eq!(
            invoices.body,
            TableBody::Rows(vec![cells(&[
                "INV-1",
                "Acme",
                "Widget",
                "2",
                "5",
                "105",
                "2024-01-01"
            ])])
        );

        assert_eq!(
            build_table(ResultTab::Products, &store).body,
            TableBody::Placeholder {
                message: "No products available".to_string(),
                colspan: 5
            }
        );
        assert_eq!(
            build_table(ResultTab::Customers, &store).body,
            TableBody::Placeholder {
                message: "No customers available".to_string(),
                colspan: 3
            }
        );
    }

    #[test]
    fn test_empty_store_placeholders() {
        let store = ResultStore::default();
        for tab in ResultTab::ALL {
            let table = build_table(tab, &store);
            match table.body {
                TableBody::Placeholder { message, colspan } => {
                    assert_eq!(message, format!("No {} available", tab.kind()));
                    assert_eq!(colspan, table.columns.len());
                }
                TableBody::Rows(_) => panic!("expected placeholder for {:?}", tab),
            }
        }
    }

    #[test]
    fn test_products_in_response_order() {
        let store = store_from(
            r#"{"products": [
                {"name": "Widget", "quantity": 3, "unitPrice": 10, "tax": 1.8, "priceWithTax": 31.8},
                {"name": "Bolt", "quantity": 100, "unitPrice": 0.25, "tax": 0, "priceWithTax": 25}
            ]}"#,
        );

        let table = build_table(ResultTab::Products, &store);
        assert_eq!(table.id, TABLE_ID_PRODUCTS);
        assert_eq!(
            table.body,
            TableBody::Rows(vec![
                cells(&["Widget", "3", "10", "1.8", "31.8"]),
                cells(&["Bolt", "100", "0.25", "0", "25"]),
            ])
        );
    }

    #[test]
    fn test_customer_phone_dash() {
        let store = store_from(
            r#"{"customers": [
                {"name": "Acme", "phone": "9876543210", "totalPurchaseAmount": 105},
                {"name": "Globex", "phone": null, "totalPurchaseAmount": 12.5},
                {"name": "Initech", "phone": "", "totalPurchaseAmount": 0},
                {"name": "Umbrella", "totalPurchaseAmount": 7}
            ]}"#,
        );

        let table = build_table(ResultTab::Customers, &store);
        assert_eq!(
            table.body,
            TableBody::Rows(vec![
                cells(&["Acme", "9876543210", "105"]),
                cells(&["Globex", "-", "12.5"]),
                cells(&["Initech", "-", "0"]),
                cells(&["Umbrella", "-", "7"]),
            ])
        );
    }

    #[test]
    fn test_numeric_columns_flagged() {
        let table = build_table(ResultTab::Invoices, &ResultStore::default());
        let numeric: Vec<bool> = table.columns.iter().map(|c| c.numeric).collect();
        assert_eq!(numeric, vec![false, false, false, true, true, true, false]);
    }

    #[test]
    fn test_spreadsheet_serial_number_shown_as_integer() {
        let store = store_from(
            r#"{"invoices": [{"serialNumber": 1001, "customerName": null,
                "productName": "Invoice Total", "quantity": 1, "tax": 18,
                "totalAmount": 118, "date": "2024-02-01"}]}"#,
        );

        assert_eq!(
            build_table(ResultTab::Invoices, &store).body,
            TableBody::Rows(vec![cells(&[
                "1001",
                "",
                "Invoice Total",
                "1",
                "18",
                "118",
                "2024-02-01"
            ])])
        );
    }

    #[test]
    fn test_string_numbers_shown_verbatim() {
        let store = store_from(
            r#"{"products": [{"name": "Bolt", "quantity": "2", "unitPrice": "49.750",
                "tax": "1,200.50", "priceWithTax": 99.5}],
                "customers": [{"name": "Acme", "phone": 9876543210, "totalPurchaseAmount": "99.5"}]}"#,
        );

        assert_eq!(
            build_table(ResultTab::Products, &store).body,
            TableBody::Rows(vec![cells(&["Bolt", "2", "49.750", "1,200.50", "99.5"])])
        );
        assert_eq!(
            build_table(ResultTab::Customers, &store).body,
            TableBody::Rows(vec![cells(&["Acme", "9876543210", "99.5"])])
        );
    }
}
