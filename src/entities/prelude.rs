pub use super::city_searches::Entity as CitySearches;
