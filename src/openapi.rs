use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::accounts::create_account::create_account,
        crate::routes::accounts::list_accounts::list_accounts,
        crate::routes::accounts::summary::accounts_summary,
        crate::routes::accounts::get_account::get_account,
        crate::routes::accounts::update_account::update_account,
        crate::routes::accounts::delete_account::delete_account,
        crate::routes::categories::create_category::create_category,
        crate::routes::categories::list_categories::list_categories,
        crate::routes::categories::get_category::get_category,
        crate::routes::categories::update_category::update_category,
        crate::routes::categories::delete_category::delete_category,
        crate::routes::categories::restore_category::restore_category,
        crate::routes::category_groups::create_group::create_group,
        crate::routes::category_groups::list_groups::list_groups,
        crate::routes::category_groups::assign_to_group::assign_to_group,
        crate::routes::category_groups::unassign_from_group::unassign_from_group,
        crate::routes::category_groups::get_group::get_group,
        crate::routes::category_groups::update_group::update_group,
        crate::routes::category_groups::delete_group::delete_group,
        crate::routes::transactions::create_normal::create_normal_transaction,
        crate::routes::transactions::create_transfer::create_transfer,
        crate::routes::transactions::list_transactions::list_transactions,
        crate::routes::transactions::bulk_categorize::bulk_categorize,
        crate::routes::transactions::get_transaction::get_transaction,
        crate::routes::transactions::update_transaction::update_transaction,
        crate::routes::transactions::delete_transaction::delete_transaction,
        crate::routes::allocations::upsert_allocation::upsert_allocation,
        crate::routes::allocations::list_allocations::list_allocations,
        crate::routes::allocations::summary::summary,
        crate::routes::allocations::ready_to_assign::ready_to_assign,
        crate::routes::allocations::cover_underfunded::cover_underfunded,
        crate::routes::allocations::get_allocation::get_allocation,
        crate::routes::allocations::delete_allocation::delete_allocation,
    ),
    components(
        schemas(
            crate::db::accounts::Account,
            crate::db::categories::Category,
            crate::db::category_groups::CategoryGroup,
            crate::db::transactions::Transaction,
            crate::db::allocations::Allocation,
            crate::errors::ErrorBody,
            crate::queries::allocations::summary::PeriodSummary,
            crate::queries::allocations::summary::CategorySummaryEntry,
            crate::queries::allocations::summary::PaymentCategoryDetails,
            crate::routes::accounts::create_account::CreateAccountRequest,
            crate::routes::accounts::update_account::UpdateAccountRequest,
            crate::routes::accounts::summary::AccountsSummaryResponse,
            crate::routes::categories::create_category::CreateCategoryRequest,
            crate::routes::categories::update_category::UpdateCategoryRequest,
            crate::routes::category_groups::create_group::CreateGroupRequest,
            crate::routes::category_groups::update_group::UpdateGroupRequest,
            crate::routes::category_groups::assign_to_group::AssignToGroupRequest,
            crate::routes::transactions::create_normal::CreateNormalTransactionRequest,
            crate::routes::transactions::create_transfer::CreateTransferRequest,
            crate::routes::transactions::create_transfer::TransferResponse,
            crate::routes::transactions::update_transaction::UpdateTransactionRequest,
            crate::routes::transactions::bulk_categorize::BulkCategorizeRequest,
            crate::routes::transactions::bulk_categorize::BulkCategorizeResponse,
            crate::routes::allocations::upsert_allocation::UpsertAllocationRequest,
            crate::routes::allocations::ready_to_assign::ReadyToAssignResponse,
            crate::routes::allocations::cover_underfunded::CoverUnderfundedRequest,
        )
    ),
    tags(
        (name = "Health", description = "Application health status"),
        (name = "Accounts", description = "Bank, cash, and credit card accounts"),
        (name = "Categories", description = "Spending categories, including auto-provisioned credit card payment categories"),
        (name = "Category Groups", description = "Groupings of categories"),
        (name = "Transactions", description = "Normal and transfer transactions"),
        (name = "Allocations", description = "Monthly budget allocations and derived budget figures"),
    ),
    info(
        title = "Ledger Kernel API",
        version = "1.0.0",
        description = "API documentation for the zero-based budgeting engine.",
        license(
            name = "MIT",
            identifier = "MIT"
        )
    ),
    servers(
        (url = "/", description = "API Root")
    )
)]
pub struct ApiDoc;
