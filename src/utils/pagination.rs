use super::validation::ValidationError;

pub const DEFAULT_LIMIT: i64 = 50;
pub const DEFAULT_PAGE: i64 = 1;

/// Raw listing query string. Everything is kept as text so that bad numbers
/// surface as our own 400s instead of extractor rejections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmployeeQueryParams {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub order: Option<String>,
    pub order_by: Option<String>,
}

impl EmployeeQueryParams {
    /// Collects the recognised keys from decoded query pairs. When a key
    /// repeats, its first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "page" => &mut params.page,
                "order" => &mut params.order,
                "orderBy" => &mut params.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than a case-insensitive "desc" sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(order) if order.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Columns the listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    EmpNo,
    BirthDate,
    FirstName,
    LastName,
    Gender,
    HireDate,
    Department,
}

impl SortColumn {
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(SortColumn::FirstName),
            Some(raw) => raw.to_ascii_lowercase(),
        };

        match raw.as_str() {
            "emp_no" => Ok(SortColumn::EmpNo),
            "birth_date" => Ok(SortColumn::BirthDate),
            "first_name" => Ok(SortColumn::FirstName),
            "last_name" => Ok(SortColumn::LastName),
            "gender" => Ok(SortColumn::Gender),
            "hire_date" => Ok(SortColumn::HireDate),
            "department" | "dept_name" => Ok(SortColumn::Department),
            _ => Err(ValidationError::InvalidParameter("orderBy")),
        }
    }

    /// Fully qualified identifier for the listing join.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::EmpNo => "e.emp_no",
            SortColumn::BirthDate => "e.birth_date",
            SortColumn::FirstName => "e.first_name",
            SortColumn::LastName => "e.last_name",
            SortColumn::Gender => "e.gender",
            SortColumn::HireDate => "e.hire_date",
            SortColumn::Department => "d.dept_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
    pub limit: i64,
    pub offset: i64,
    pub page: i64,
}

fn parse_positive(raw: Option<&str>, default: i64, name: &'static str) -> Result<i64, ValidationError> {
    match raw {
        None | Some("") => Ok(default),
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) if value >= 1 => Ok(value),
            _ => Err(ValidationError::InvalidParameter(name)),
        },
    }
}

impl ListParams {
    pub fn from_query(query: &EmployeeQueryParams) -> Result<Self, ValidationError> {
        let limit = parse_positive(query.limit.as_deref(), DEFAULT_LIMIT, "limit")?;
        let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE, "page")?;
        let offset = limit
            .checked_mul(page - 1)
            .ok_or(ValidationError::InvalidParameter("page"))?;

        Ok(Self {
            sort_column: SortColumn::parse(query.order_by.as_deref())?,
            sort_order: SortOrder::parse(query.order.as_deref()),
            limit,
            offset,
            page,
        })
    }
}
