use super::{
    models::{
        Contract, ContractDraft, ContractId, DashboardStats, ListQuery, Page, Profile, Project,
        ProjectDraft, ProjectId, Request, RequestDraft, RequestId,
    },
    ApiClient, ApiResult,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectService {
    client: ApiClient,
}

impl ProjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Project>> {
        self.client
            .get_json("/projects", &query.to_query_pairs())
            .await
    }

    pub async fn get(&self, id: ProjectId) -> ApiResult<Project> {
        self.client.get_json(&format!("/projects/{id}"), &[]).await
    }

    pub async fn create(&self, draft: &ProjectDraft) -> ApiResult<Project> {
        self.client.post_json("/projects", draft).await
    }

    pub async fn update(&self, id: ProjectId, draft: &ProjectDraft) -> ApiResult<Project> {
        self.client
            .put_json(&format!("/projects/{id}"), draft)
            .await
    }

    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.client.get_json("/projects/stats", &[]).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractService {
    client: ApiClient,
}

impl ContractService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Contract>> {
        self.client
            .get_json("/contracts", &query.to_query_pairs())
            .await
    }

    pub async fn get(&self, id: ContractId) -> ApiResult<Contract> {
        self.client.get_json(&format!("/contracts/{id}"), &[]).await
    }

    pub async fn list_for_project(
        &self,
        project_id: ProjectId,
        query: &ListQuery,
    ) -> ApiResult<Page<Contract>> {
        self.client
            .get_json(
                &format!("/projects/{project_id}/contracts"),
                &query.to_query_pairs(),
            )
            .await
    }

    pub async fn create(&self, draft: &ContractDraft) -> ApiResult<Contract> {
        self.client.post_json("/contracts", draft).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestService {
    client: ApiClient,
}

impl RequestService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Request>> {
        self.client
            .get_json("/requests", &query.to_query_pairs())
            .await
    }

    pub async fn get(&self, id: RequestId) -> ApiResult<Request> {
        self.client.get_json(&format!("/requests/{id}"), &[]).await
    }

    pub async fn list_for_contract(
        &self,
        contract_id: ContractId,
        query: &ListQuery,
    ) -> ApiResult<Page<Request>> {
        self.client
            .get_json(
                &format!("/contracts/{contract_id}/requests"),
                &query.to_query_pairs(),
            )
            .await
    }

    pub async fn create(&self, draft: &RequestDraft) -> ApiResult<Request> {
        self.client.post_json("/requests", draft).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> ApiResult<Profile> {
        self.client.get_json("/profile", &[]).await
    }

    pub async fn update(&self, profile: &Profile) -> ApiResult<Profile> {
        self.client.put_json("/profile", profile).await
    }
}
