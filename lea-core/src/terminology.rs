//! Plain-language descriptions for the well-known attribute columns of the
//! upstream district finance dataset. Unknown columns simply have no
//! description; the dataset's attribute set is open.

/// Look up the description for an attribute column, case-insensitively.
pub fn describe(attribute: &str) -> Option<&'static str> {
    let key = attribute.to_ascii_lowercase();
    let description = match key.as_str() {
        "rev_total" => {
            "Total revenue received by the school district from all sources (federal, state, and local)"
        }
        "rev_fed_total" => "Total federal revenue, including grants and program-specific funding",
        "rev_state_total" => {
            "Total revenue received from state sources, including state education funding"
        }
        "rev_local_total" => {
            "Total revenue from local sources, including property taxes and local contributions"
        }
        "exp_total" => "Total expenditures made by the district across all categories",
        "exp_current_instruction_total" => {
            "Total current spending specifically for instruction-related activities"
        }
        "outlay_capital_total" => {
            "Total spending on capital improvements, such as buildings and equipment"
        }
        "number_of_schools" => "Total number of schools operating under this district",
        "enrollment" => "Total number of students enrolled in the district",
        "teachers_total_fte" => "Number of full-time equivalent teaching positions",
        "salaries_instruction" => "Total salaries paid for instructional staff",
        "benefits_employee_total" => {
            "Total cost of employee benefits including healthcare, retirement, etc."
        }
        "debt_interest" => "Interest payments on district debt",
        "debt_longterm_outstand_end_fy" => "Long-term debt balance at the end of fiscal year",
        "debt_shortterm_outstand_end_fy" => "Short-term debt balance at the end of fiscal year",
        "assessed_value" => {
            "Combined secured and unsecured net taxable property value in the district"
        }
        "adjusted_assessed_value" => {
            "Assessed property value adjusted to 2023 dollars to account for inflation"
        }
        "payments_charter_schools" => "Total payments made to charter schools by the district",
        _ => return None,
    };
    Some(description)
}
