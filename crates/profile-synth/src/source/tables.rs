//! Embedded lookup data for [`FakeFieldSource`](super::FakeFieldSource).

pub(super) const FEMALE_FIRST_NAMES: &[&str] = &[
    "Abigail", "Alexis", "Alice", "Amanda", "Amber", "Amy", "Angela", "Anna", "Ashley", "Barbara",
    "Brittany", "Carol", "Catherine", "Christina", "Cynthia", "Danielle", "Deborah", "Diana",
    "Donna", "Elizabeth", "Emily", "Emma", "Erin", "Grace", "Hannah", "Heather", "Helen",
    "Jacqueline", "Jennifer", "Jessica", "Julia", "Karen", "Katherine", "Kimberly", "Laura",
    "Linda", "Lisa", "Margaret", "Maria", "Megan", "Melissa", "Michelle", "Nancy", "Natalie",
    "Nicole", "Olivia", "Patricia", "Rachel", "Rebecca", "Samantha", "Sandra", "Sarah",
    "Sharon", "Stephanie", "Susan", "Tiffany", "Victoria",
];

pub(super) const MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Alexander", "Andrew", "Anthony", "Benjamin", "Brandon", "Brian",
    "Charles", "Christopher", "Daniel", "David", "Dennis", "Donald", "Edward", "Eric", "Frank",
    "Gary", "George", "Gregory", "Henry", "Jacob", "James", "Jason", "Jeffrey", "John",
    "Jonathan", "Joseph", "Joshua", "Justin", "Kenneth", "Kevin", "Larry", "Mark", "Matthew",
    "Michael", "Nathan", "Nicholas", "Patrick", "Paul", "Peter", "Raymond", "Richard", "Robert",
    "Ryan", "Samuel", "Scott", "Stephen", "Steven", "Thomas", "Timothy", "Tyler", "William",
];

pub(super) const FEMALE_PREFIXES: &[&str] = &["Mrs.", "Ms.", "Miss", "Dr."];

pub(super) const MALE_PREFIXES: &[&str] = &["Mr.", "Dr."];

pub(super) const FEMALE_SUFFIXES: &[&str] = &["MD", "DDS", "PhD", "DVM"];

pub(super) const MALE_SUFFIXES: &[&str] = &[
    "Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "DDS", "PhD", "DVM",
];

/// Inclusive ZIP ranges per state, including DC.
pub(super) const STATE_ZIP_RANGES: &[(&str, u32, u32)] = &[
    ("AL", 35004, 36925),
    ("AK", 99501, 99950),
    ("AZ", 85001, 86556),
    ("AR", 71601, 72959),
    ("CA", 90001, 96162),
    ("CO", 80001, 81658),
    ("CT", 6001, 6389),
    ("DE", 19701, 19980),
    ("DC", 20001, 20039),
    ("FL", 32004, 34997),
    ("GA", 30001, 31999),
    ("HI", 96701, 96898),
    ("ID", 83201, 83876),
    ("IL", 60001, 62999),
    ("IN", 46001, 47997),
    ("IA", 50001, 52809),
    ("KS", 66002, 67954),
    ("KY", 40003, 42788),
    ("LA", 70001, 71232),
    ("ME", 3901, 4992),
    ("MD", 20812, 21930),
    ("MA", 1001, 2791),
    ("MI", 48001, 49971),
    ("MN", 55001, 56763),
    ("MS", 38601, 39776),
    ("MO", 63001, 65899),
    ("MT", 59001, 59937),
    ("NE", 68001, 68118),
    ("NV", 88901, 89883),
    ("NH", 3031, 3897),
    ("NJ", 7001, 8989),
    ("NM", 87001, 88441),
    ("NY", 10001, 14905),
    ("NC", 27006, 28909),
    ("ND", 58001, 58856),
    ("OH", 43001, 45999),
    ("OK", 73001, 73199),
    ("OR", 97001, 97920),
    ("PA", 15001, 19640),
    ("RI", 2801, 2940),
    ("SC", 29001, 29948),
    ("SD", 57001, 57799),
    ("TN", 37010, 38589),
    ("TX", 75503, 79999),
    ("UT", 84001, 84784),
    ("VT", 5001, 5495),
    ("VA", 22001, 24658),
    ("WA", 98001, 99403),
    ("WV", 24701, 26886),
    ("WI", 53001, 54990),
    ("WY", 82001, 83128),
];

/// Looks up the inclusive ZIP range for a state abbreviation.
pub(super) fn zip_range(state: &str) -> Option<(u32, u32)> {
    STATE_ZIP_RANGES
        .iter()
        .find(|(abbr, _, _)| *abbr == state)
        .map(|(_, low, high)| (*low, *high))
}
