//! The reference book catalog seeded into the bookstore collection.

use bookstore::BookRecord;

/// Number of books in the built-in catalog.
pub const CATALOG_SIZE: usize = 12;

#[allow(clippy::too_many_arguments)]
fn book(
    title: &str,
    author: &str,
    genre: &str,
    published_year: i32,
    price: f64,
    in_stock: bool,
    pages: i32,
    publisher: &str,
) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        published_year,
        price,
        in_stock,
        pages,
        publisher: publisher.to_string(),
    }
}

/// Returns the built-in catalog, in insertion order.
pub fn books() -> Vec<BookRecord> {
    vec![
        book(
            "Solar Analytics: A Practical Guide",
            "A. Kebede",
            "Science",
            2021,
            34.99,
            true,
            220,
            "GreenEnergy Press",
        ),
        book(
            "Intro to Python Data Analysis",
            "D. Woldesenbet",
            "Technology",
            2023,
            29.5,
            true,
            310,
            "TechBooks Ltd",
        ),
        book(
            "Machine Learning with PyTorch",
            "S. Alemu",
            "Technology",
            2022,
            45.0,
            false,
            420,
            "AI Books",
        ),
        book(
            "Modern Database Design",
            "K. Tesfaye",
            "Education",
            2019,
            39.99,
            true,
            380,
            "EduPress",
        ),
        book(
            "Deep Learning Essentials",
            "M. Bekele",
            "Technology",
            2020,
            49.99,
            true,
            500,
            "DeepLearn Publishing",
        ),
        book(
            "The Cryptocurrency Trader",
            "D. Woldesenbet",
            "Finance",
            2018,
            24.0,
            false,
            200,
            "FinPress",
        ),
        book(
            "Web Development with JavaScript",
            "A. Solomon",
            "Technology",
            2017,
            27.5,
            true,
            280,
            "WebBooks",
        ),
        book(
            "Data Visualization Patterns",
            "L. Mengesha",
            "Design",
            2016,
            31.25,
            true,
            240,
            "VizHouse",
        ),
        book(
            "Effective Project Management",
            "R. Yohannes",
            "Business",
            2015,
            22.0,
            true,
            190,
            "BizBooks",
        ),
        book(
            "Cloud Infrastructure Cookbook",
            "N. Abebe",
            "Technology",
            2021,
            42.0,
            true,
            360,
            "CloudPress",
        ),
        book(
            "Startups & Scaling",
            "D. Woldesenbet",
            "Business",
            2024,
            38.0,
            true,
            260,
            "ScaleUp",
        ),
        book(
            "Practical MongoDB",
            "G. Tadesse",
            "Technology",
            2014,
            28.0,
            false,
            320,
            "NoSQL Press",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore::decade_of;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_catalog_size() {
        assert_eq!(books().len(), CATALOG_SIZE);
    }

    #[test]
    fn test_practical_mongodb_is_literal() {
        let books = books();
        let book = books
            .iter()
            .find(|b| b.title == "Practical MongoDB")
            .unwrap();

        assert_eq!(book.author, "G. Tadesse");
        assert_eq!(book.genre, "Technology");
        assert_eq!(book.published_year, 2014);
        assert_eq!(book.price, 28.0);
        assert!(!book.in_stock);
        assert_eq!(book.pages, 320);
        assert_eq!(book.publisher, "NoSQL Press");
    }

    #[test]
    fn test_three_books_by_woldesenbet() {
        let count = books()
            .iter()
            .filter(|b| b.author == "D. Woldesenbet")
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_all_books_have_positive_pages() {
        assert!(books().iter().all(|b| b.pages > 0));
    }

    #[test]
    fn test_woldesenbet_is_top_author() {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let books = books();
        for book in &books {
            *counts.entry(book.author.as_str()).or_default() += 1;
        }

        let (author, count) = counts.into_iter().max_by_key(|(_, c)| *c).unwrap();
        assert_eq!(author, "D. Woldesenbet");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_decade_distribution() {
        let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
        for book in books() {
            *decades.entry(decade_of(book.published_year)).or_default() += 1;
        }

        assert_eq!(decades.into_iter().collect::<Vec<_>>(), vec![(2010, 6), (2020, 6)]);
    }
}
