use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Prices,
    Pricing,
    Products,
    Suppliers,
}
